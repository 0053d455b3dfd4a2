// src/sources/mod.rs

use std::future::Future;

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::errors::Result;
use crate::outcome::{ApiError, Outcome};
use crate::response::ApiResponse;

pub mod sat;
pub mod schools;

/// Runs a remote operation once and folds its result into an [`Outcome`].
///
/// The operation performs exactly one HTTP call and resolves to the raw
/// response envelope. A success-range status yields `Success` with the
/// decoded body (which may be absent). A failure status yields `Error`
/// carrying the server's own message when the error body provides one,
/// or `default_error_message` otherwise. A failure the operation itself
/// resolves with — connection refused, timeout, a success body that does
/// not decode — is absorbed into `Error` as well; this function never
/// returns an error and makes no second attempt.
pub async fn get_response<T, F, Fut>(operation: F, default_error_message: &str) -> Outcome<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<ApiResponse<T>>>,
{
    match operation().await {
        Ok(response) => {
            if response.is_success() {
                Outcome::success(response.body)
            } else {
                let error = parse_error(response.error_body.as_deref());
                let message = error
                    .status_message
                    .clone()
                    .unwrap_or_else(|| default_error_message.to_string());
                Outcome::error(message, Some(error))
            }
        }
        Err(e) => Outcome::error(format!("Unknown Error {}", e), None),
    }
}

/// Decodes a raw error body into an [`ApiError`]. An absent or
/// undecodable body yields the empty default instance.
fn parse_error(error_body: Option<&[u8]>) -> ApiError {
    match error_body {
        Some(raw) => serde_json::from_slice(raw).unwrap_or_default(),
        None => ApiError::default(),
    }
}

/// Issues one GET against the configured API and drains it into an envelope.
pub(crate) async fn fetch_json<T: DeserializeOwned>(
    client: &Client,
    config: &ApiConfig,
    path: &str,
    query: &[(&str, &str)],
) -> Result<ApiResponse<T>> {
    let url = format!("{}{}", config.api_base.trim_end_matches('/'), path);

    debug!("GET {} {:?}", url, query);

    let mut request = client.get(&url).query(query);
    if let Some(token) = &config.app_token {
        request = request.header("X-App-Token", token);
    }

    let response = request.send().await?;
    debug!("{} responded with status {}", url, response.status());

    ApiResponse::from_response(response).await
}
