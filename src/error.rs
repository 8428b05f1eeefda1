//! Error handling for the cadastro client.
//!
//! Failures collapse to a single user-facing line at the client boundary:
//! a backend-supplied `message`, else `"{status} - {reason}"`, else the
//! transport error. Normalization is pure and UI-agnostic; showing the
//! message is the presentation layer's job (see [`crate::notify`]).

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Unified error type for the cadastro client.
#[derive(Error, Debug)]
pub enum Error {
    /// Network or HTTP transport errors.
    #[error("Error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response, already normalized to one display message.
    #[error("{message}")]
    Api { status: StatusCode, message: String },

    /// JSON serialization or deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing errors.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Local misuse of an operation (e.g. submitting an id-less update).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// General errors.
    #[error("{0}")]
    General(String),
}

/// Optional structured body the backend attaches to failures.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl Error {
    /// Create a new invalid-input error.
    pub fn invalid_input(msg: impl std::fmt::Display) -> Self {
        Error::InvalidInput(msg.to_string())
    }

    /// Create a new general error.
    pub fn general(msg: impl std::fmt::Display) -> Self {
        Error::General(msg.to_string())
    }

    /// Consumes a non-success response and normalizes it into [`Error::Api`].
    pub async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Error::Api {
            status,
            message: normalize_api_message(status, &body),
        }
    }

    /// The one human-readable line a notification should display.
    pub fn display_message(&self) -> String {
        match self {
            Error::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// HTTP status of the failed call, when one was received at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Http(err) => err.status(),
            _ => None,
        }
    }
}

/// Pure message normalization: prefer a non-empty structured `message`
/// field, else synthesize `"{status} - {reason}"`.
fn normalize_api_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| {
            format!(
                "{} - {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )
        })
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_message_wins() {
        let message = normalize_api_message(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"message":"boom"}"#,
        );
        assert_eq!(message, "boom");
    }

    #[test]
    fn missing_body_falls_back_to_status_line() {
        let message = normalize_api_message(StatusCode::INTERNAL_SERVER_ERROR, "");
        assert_eq!(message, "500 - Internal Server Error");
    }

    #[test]
    fn empty_message_field_falls_back_to_status_line() {
        let message =
            normalize_api_message(StatusCode::INTERNAL_SERVER_ERROR, r#"{"message":""}"#);
        assert_eq!(message, "500 - Internal Server Error");
    }

    #[test]
    fn unstructured_body_falls_back_to_status_line() {
        let message = normalize_api_message(StatusCode::NOT_FOUND, "<html>nope</html>");
        assert_eq!(message, "404 - Not Found");
    }

    #[test]
    fn body_without_message_key_falls_back() {
        let message = normalize_api_message(
            StatusCode::BAD_REQUEST,
            r#"{"timestamp":"2024-01-01","status":400}"#,
        );
        assert_eq!(message, "400 - Bad Request");
    }

    #[test]
    fn display_message_matches_api_message() {
        let err = Error::Api {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "boom".into(),
        };
        assert_eq!(err.display_message(), "boom");
        assert_eq!(err.to_string(), "boom");
    }
}
