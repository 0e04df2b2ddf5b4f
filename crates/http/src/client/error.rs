//! Client error taxonomy.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure; the request may never have left the browser.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Invalid or missing credentials (401).
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The session is no longer acceptable to the platform (403).
    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    /// Any other non-success status.
    #[error("platform error {status}: {message}")]
    Platform { status: u16, message: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid client configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::Platform {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// True for the one status the session guard treats as fatal.
    pub fn is_forbidden(&self) -> bool {
        matches!(self, Self::Forbidden(_))
    }
}
