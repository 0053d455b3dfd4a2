// src/config.rs
use crate::errors::{ClientError, Result};

/// Configuration for the NYC open data API, loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub api_base: String,
    pub app_token: Option<String>,
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let api_base = std::env::var("SCHOOLS_API_BASE")
            .unwrap_or_else(|_| "https://data.cityofnewyork.us".to_string());

        // Optional Socrata app token; requests work without one at a lower rate limit.
        let app_token = std::env::var("SCHOOLS_APP_TOKEN")
            .ok()
            .filter(|token| !token.is_empty());

        let timeout_secs = match std::env::var("SCHOOLS_HTTP_TIMEOUT_SECS") {
            Ok(raw) => raw.parse().map_err(|_| {
                ClientError::Config(format!(
                    "SCHOOLS_HTTP_TIMEOUT_SECS must be a number of seconds, got '{}'",
                    raw
                ))
            })?,
            Err(_) => 30,
        };

        Ok(ApiConfig {
            api_base,
            app_token,
            timeout_secs,
        })
    }
}
