//! Error types surfaced by the overlay services.

use thiserror::Error;

/// Result type alias using OverlayError.
pub type OverlayResult<T> = Result<T, OverlayError>;

/// Service-level error that the library errors collapse into.
#[derive(Debug, Error)]
pub enum OverlayError {
    // === Input Errors ===
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // === Infrastructure Errors ===
    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Request timeout")]
    Timeout,
}

impl OverlayError {
    /// Get the HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            OverlayError::InvalidDocument(_)
            | OverlayError::InvalidPayload(_) => 400,

            OverlayError::Timeout => 504,

            _ => 500,
        }
    }
}

impl From<std::io::Error> for OverlayError {
    fn from(err: std::io::Error) -> Self {
        OverlayError::InternalError(err.to_string())
    }
}

impl From<serde_json::Error> for OverlayError {
    fn from(err: serde_json::Error) -> Self {
        OverlayError::InvalidPayload(format!("JSON error: {}", err))
    }
}
