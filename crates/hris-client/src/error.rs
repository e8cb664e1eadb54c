//! Error types for the admin REST client.

use thiserror::Error;

/// Errors from admin API calls.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// Request could not be sent or the connection failed.
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with an error status. `message` is the JSON
    /// `detail`/`error` text when present, surfaced to the operator
    /// verbatim.
    #[error("backend error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body could not be decoded.
    #[error("JSON parse error: {0}")]
    JsonParse(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonParse(err.to_string())
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
