//! Error types for KML parsing operations.

use thiserror::Error;

/// Result type for KML parser operations.
pub type KmlResult<T> = Result<T, KmlError>;

/// Fatal document errors. Anything recoverable is left to the caller.
#[derive(Error, Debug)]
pub enum KmlError {
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document does not end with its closing root tag
    #[error("KML document is incomplete or truncated: missing closing </kml> tag")]
    Truncated,

    /// Markup is not well formed, or the Document node is missing
    #[error("Failed to decode KML: {0}")]
    Decode(String),
}

impl From<quick_xml::de::DeError> for KmlError {
    fn from(err: quick_xml::de::DeError) -> Self {
        KmlError::Decode(err.to_string())
    }
}
