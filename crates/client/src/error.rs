//! Error taxonomy for API operations.

use thiserror::Error;

/// Errors that can occur when interacting with the shop admin API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed at the transport level.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Authentication/authorization failed.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// No session token is set; the caller must log in first.
    #[error("No session token; log in first")]
    NoSessionToken,

    /// Server returned a non-success status.
    #[error("Server error ({status}): {}", message_or_status(.message))]
    Server {
        /// HTTP status code.
        status: u16,
        /// `message` field from the response body, when present.
        message: Option<String>,
    },
}

fn message_or_status(message: &Option<String>) -> &str {
    message.as_deref().unwrap_or("no error message in body")
}
