// src/sources/sat.rs

use reqwest::Client;

use crate::config::ApiConfig;
use crate::models::SatResult;
use crate::outcome::Outcome;
use crate::sources::{fetch_json, get_response};

const SAT_RESULTS_RESOURCE: &str = "/resource/f9bf-2cp4.json";

/// Remote source for school SAT results.
pub struct SatResultsSource {
    client: Client,
    config: ApiConfig,
}

impl SatResultsSource {
    /// Creates a new `SatResultsSource`.
    pub fn new(client: Client, config: ApiConfig) -> Self {
        Self { client, config }
    }

    /// Fetches the SAT result rows for a school, matched by DBN. Schools
    /// that never reported results come back as an empty list.
    pub async fn fetch_sat_results(&self, dbn: &str) -> Outcome<Vec<SatResult>> {
        let query = [("dbn", dbn)];
        get_response(
            || fetch_json(&self.client, &self.config, SAT_RESULTS_RESOURCE, &query),
            "Could not load SAT results",
        )
        .await
    }
}
