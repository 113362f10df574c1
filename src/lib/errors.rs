//! Error type shared by API helpers, feature clients, and workflows. Messages
//! are rendered in notifications, so variants must never carry secrets.

use super::endpoints::sanitize_body;
use serde::Deserialize;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    /// `body` is the raw response text; it is only truncated for display.
    #[error("Request failed ({status}): {}", sanitize_body(.body))]
    Http { status: u16, body: String },
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Request error: {0}")]
    Serialization(String),
}

/// JSON error body returned by the backend, e.g. `{"message": "Email exists"}`.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl AppError {
    /// Returns the server-supplied `message` when this is an HTTP error whose
    /// body is JSON carrying a non-empty string `message` field.
    pub fn server_message(&self) -> Option<String> {
        let AppError::Http { body, .. } = self else {
            return None;
        };
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.message)
            .map(|message| message.trim().to_string())
            .filter(|message| !message.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::AppError;

    fn http(status: u16, body: &str) -> AppError {
        AppError::Http {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn server_message_reads_json_message_field() {
        assert_eq!(
            http(409, r#"{"message":"Email exists"}"#).server_message(),
            Some("Email exists".to_string())
        );
    }

    #[test]
    fn server_message_ignores_plain_text_and_missing_fields() {
        assert_eq!(http(500, "Internal Server Error").server_message(), None);
        assert_eq!(http(400, r#"{"error":"bad"}"#).server_message(), None);
        assert_eq!(http(400, r#"{"message":"   "}"#).server_message(), None);
        assert_eq!(http(400, r#"{"message":42}"#).server_message(), None);
    }

    #[test]
    fn server_message_is_only_for_http_errors() {
        let err = AppError::Network(r#"{"message":"nope"}"#.to_string());
        assert_eq!(err.server_message(), None);
    }

    #[test]
    fn server_message_survives_long_bodies() {
        let body = format!(
            r#"{{"message":"Email exists","detail":"{}"}}"#,
            "x".repeat(600)
        );
        let err = http(409, &body);

        assert_eq!(err.server_message(), Some("Email exists".to_string()));
        assert!(err.to_string().chars().count() < body.chars().count());
    }

    #[test]
    fn display_includes_status() {
        assert_eq!(
            http(503, "down").to_string(),
            "Request failed (503): down"
        );
    }
}
