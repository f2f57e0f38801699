//! Error types for extraction runs.

use kml_parser::KmlError;
use overlay_common::OverlayError;
use thiserror::Error;

pub type ExtractionResult<T> = Result<T, ExtractionError>;

/// Errors that abort a whole extraction run.
///
/// Per-folder problems never surface here; they become
/// [`ExtractionWarning`](crate::ExtractionWarning)s on the report.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error(transparent)]
    Kml(#[from] KmlError),

    #[error("Invalid extraction config: {0}")]
    InvalidConfig(String),
}

impl From<ExtractionError> for OverlayError {
    fn from(err: ExtractionError) -> Self {
        match err {
            ExtractionError::Kml(KmlError::Io(e)) => OverlayError::InternalError(e.to_string()),
            ExtractionError::Kml(e) => OverlayError::InvalidDocument(e.to_string()),
            ExtractionError::InvalidConfig(msg) => OverlayError::InvalidConfig(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_errors_map_to_bad_request() {
        let err: OverlayError = ExtractionError::Kml(KmlError::Truncated).into();
        assert_eq!(err.http_status_code(), 400);

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: OverlayError = ExtractionError::Kml(KmlError::Io(io)).into();
        assert_eq!(err.http_status_code(), 500);
    }
}
