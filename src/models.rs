// src/models.rs
use serde::{Deserialize, Serialize};

/// One row of the high school directory resource.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct School {
    pub dbn: String,
    pub school_name: String,
    #[serde(default)]
    pub boro: Option<String>,
    #[serde(default)]
    pub overview_paragraph: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub school_email: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub total_students: Option<String>,
}

/// One row of the SAT results resource. The API reports scores as strings
/// and suppresses them for small cohorts, so every score field is optional.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SatResult {
    pub dbn: String,
    pub school_name: String,
    #[serde(default)]
    pub num_of_sat_test_takers: Option<String>,
    #[serde(default)]
    pub sat_critical_reading_avg_score: Option<String>,
    #[serde(default)]
    pub sat_math_avg_score: Option<String>,
    #[serde(default)]
    pub sat_writing_avg_score: Option<String>,
}
