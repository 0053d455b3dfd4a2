// src/outcome.rs
use serde::{Deserialize, Serialize};

/// The outcome of one remote call: the decoded payload, or an error
/// message plus whatever structured detail the server provided.
/// Data-source methods return this instead of an error; callers never
/// have a failure to propagate.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// The call succeeded. The body is `None` when the server returned
    /// an empty payload.
    Success(Option<T>),
    /// The call failed. `error` carries the decoded error body for HTTP
    /// failures and is `None` when the request itself never produced a
    /// response.
    Error {
        message: String,
        error: Option<ApiError>,
    },
}

impl<T> Outcome<T> {
    pub fn success(body: Option<T>) -> Self {
        Outcome::Success(body)
    }

    pub fn error(message: impl Into<String>, error: Option<ApiError>) -> Self {
        Outcome::Error {
            message: message.into(),
            error,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Consumes the outcome and returns the payload, if any.
    pub fn into_body(self) -> Option<T> {
        match self {
            Outcome::Success(body) => body,
            Outcome::Error { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Error { message, .. } => Some(message),
        }
    }
}

/// Structured decode of a failure response body. The API reports a
/// `statusMessage` field; a few endpoints say `message` instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    #[serde(default, alias = "message")]
    pub status_message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_accessors() {
        let outcome = Outcome::success(Some(7));
        assert!(outcome.is_success());
        assert_eq!(outcome.error_message(), None);
        assert_eq!(outcome.into_body(), Some(7));

        let empty: Outcome<i32> = Outcome::success(None);
        assert!(empty.is_success());
        assert_eq!(empty.into_body(), None);
    }

    #[test]
    fn test_error_accessors() {
        let outcome: Outcome<i32> = Outcome::error("boom", None);
        assert!(!outcome.is_success());
        assert_eq!(outcome.error_message(), Some("boom"));
        assert_eq!(outcome.into_body(), None);
    }

    #[test]
    fn test_api_error_field_names() {
        let primary: ApiError = serde_json::from_str(r#"{"statusMessage":"Not Found"}"#).unwrap();
        assert_eq!(primary.status_message.as_deref(), Some("Not Found"));

        let aliased: ApiError = serde_json::from_str(r#"{"message":"Not Found"}"#).unwrap();
        assert_eq!(aliased.status_message.as_deref(), Some("Not Found"));

        let empty: ApiError = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, ApiError::default());
    }
}
