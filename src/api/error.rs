//! Error types for the backend client.

use thiserror::Error;

/// Errors that can occur while talking to the summarization backend.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connect, timeout, body decoding).
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// HTTP client configuration error.
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    /// The backend answered with a non-success status.
    #[error("backend returned status: {0}")]
    Status(u16),

    /// The configured base URL cannot carry endpoint paths.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The response parsed but lacks a field the caller needs.
    #[error("response is missing field `{0}`")]
    MissingField(&'static str),
}

impl ClientError {
    /// Whether the failure happened before a usable response arrived.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::HttpRequest(_) | Self::Status(_))
    }
}

/// Convenience result alias for backend operations.
pub type ClientResult<T> = Result<T, ClientError>;
