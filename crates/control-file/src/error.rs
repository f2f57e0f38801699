use overlay_common::OverlayError;
use thiserror::Error;

pub type ControlFileResult<T> = Result<T, ControlFileError>;

/// Reasons a payload cannot be written as a CONTROL file.
#[derive(Debug, Error)]
pub enum ControlFileError {
    #[error("Invalid payload JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Payload has no release points")]
    NoPoints,

    #[error("Payload has no meteorology files")]
    NoMetFiles,

    #[error("Concentration runs need exactly one concentration grid, got {0}")]
    GridCount(usize),

    #[error("Epoch {0} is out of range")]
    InvalidEpoch(i64),
}

impl From<ControlFileError> for OverlayError {
    fn from(err: ControlFileError) -> Self {
        OverlayError::InvalidPayload(err.to_string())
    }
}
