//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Request could not be built (malformed base URL)
    #[error("Invalid request: {0}")]
    Invalid(String),

    /// Structured /v1 API error (`{"error": {"code", "message"}}`)
    #[error("{code}: {message}")]
    Api { code: String, message: String },

    /// Legacy endpoint rejection (`{"detail": "..."}`)
    #[error("Rejected: {0}")]
    Rejected(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Local validation error (blocked before any network call)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal / unexpected server error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
