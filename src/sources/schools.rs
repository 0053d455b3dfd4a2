// src/sources/schools.rs

use reqwest::Client;

use crate::config::ApiConfig;
use crate::models::School;
use crate::outcome::Outcome;
use crate::sources::{fetch_json, get_response};

const DIRECTORY_RESOURCE: &str = "/resource/s3k6-pzi2.json";

// The directory has well under 500 rows; one page covers it.
const DIRECTORY_ROW_LIMIT: &str = "500";

/// Remote source for the high school directory.
pub struct SchoolDirectorySource {
    client: Client,
    config: ApiConfig,
}

impl SchoolDirectorySource {
    /// Creates a new `SchoolDirectorySource`.
    pub fn new(client: Client, config: ApiConfig) -> Self {
        Self { client, config }
    }

    /// Fetches the full school directory.
    pub async fn fetch_schools(&self) -> Outcome<Vec<School>> {
        let query = [("$limit", DIRECTORY_ROW_LIMIT)];
        get_response(
            || fetch_json(&self.client, &self.config, DIRECTORY_RESOURCE, &query),
            "Could not load the school directory",
        )
        .await
    }

    /// Fetches the directory rows for a single school, matched by DBN.
    pub async fn fetch_school(&self, dbn: &str) -> Outcome<Vec<School>> {
        let query = [("dbn", dbn)];
        get_response(
            || fetch_json(&self.client, &self.config, DIRECTORY_RESOURCE, &query),
            "Could not load the school",
        )
        .await
    }
}
