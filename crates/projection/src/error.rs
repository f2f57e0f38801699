//! Error types for projection operations.

use thiserror::Error;

/// Result type for projection operations.
pub type ProjectionResult<T> = Result<T, ProjectionError>;

/// Error types for building a pixel frame.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjectionError {
    /// The extent has zero (or negative) width or height in projected space.
    #[error("Degenerate extent: {width} x {height} projected units")]
    DegenerateExtent { width: f64, height: f64 },

    /// A bound was NaN or infinite.
    #[error("Non-finite bound: {0}")]
    NonFinite(String),

    /// Canvas must be at least one pixel wide.
    #[error("Invalid canvas size: {0}")]
    InvalidSize(u32),
}
