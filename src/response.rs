// src/response.rs
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::errors::Result;

/// Raw envelope of a single API call: the HTTP status, the decoded body
/// when the call succeeded, and the untouched error body when it did not.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub status: StatusCode,
    pub body: Option<T>,
    pub error_body: Option<Vec<u8>>,
}

impl<T> ApiResponse<T> {
    pub fn new(status: StatusCode, body: Option<T>, error_body: Option<Vec<u8>>) -> Self {
        Self {
            status,
            body,
            error_body,
        }
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Drains a live response into an envelope. Success bodies are decoded
    /// as JSON (an empty body stays `None`); failure bodies are kept raw
    /// for the error parser.
    pub async fn from_response(response: reqwest::Response) -> Result<Self> {
        let status = response.status();
        let bytes = response.bytes().await?;

        if status.is_success() {
            let body = if bytes.is_empty() {
                None
            } else {
                Some(serde_json::from_slice(&bytes)?)
            };
            Ok(Self::new(status, body, None))
        } else {
            Ok(Self::new(status, None, Some(bytes.to_vec())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_success_follows_status_range() {
        let ok: ApiResponse<()> = ApiResponse::new(StatusCode::OK, Some(()), None);
        assert!(ok.is_success());

        let created: ApiResponse<()> = ApiResponse::new(StatusCode::CREATED, None, None);
        assert!(created.is_success());

        let not_found: ApiResponse<()> = ApiResponse::new(StatusCode::NOT_FOUND, None, None);
        assert!(!not_found.is_success());
    }
}
