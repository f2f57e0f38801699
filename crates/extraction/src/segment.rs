//! Output records and recoverable-problem reporting.

use overlay_common::BoundingBox;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One rendered time step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Unix epoch seconds
    pub t: i64,
    pub bbox: BoundingBox,
    /// `data:image/png;base64,...` URI of the raster
    pub base64: String,
}

/// A problem that was worked around instead of failing the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExtractionWarning {
    /// Style color failed to decode; opaque black was used.
    InvalidColor { style_id: String, value: String },
    /// Placemark style reference missing or unknown; translucent red was used.
    UnresolvedStyle {
        folder: String,
        style_url: Option<String>,
    },
    /// Folder skipped: no parsable vertices.
    NoVertices { folder: String },
    /// Folder skipped: bounding box has no width or no height.
    DegenerateBounds { folder: String, bbox: BoundingBox },
    /// Folder time could not be determined; wall-clock time was used.
    FallbackTimestamp { folder: String, t: i64 },
    /// Folder skipped: canvas or encoder failure.
    RenderFailed { folder: String, reason: String },
}

impl ExtractionWarning {
    /// Folder the warning concerns, if any.
    pub fn folder(&self) -> Option<&str> {
        match self {
            ExtractionWarning::InvalidColor { .. } => None,
            ExtractionWarning::UnresolvedStyle { folder, .. }
            | ExtractionWarning::NoVertices { folder }
            | ExtractionWarning::DegenerateBounds { folder, .. }
            | ExtractionWarning::FallbackTimestamp { folder, .. }
            | ExtractionWarning::RenderFailed { folder, .. } => Some(folder),
        }
    }
}

impl fmt::Display for ExtractionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionWarning::InvalidColor { style_id, value } => write!(
                f,
                "style '{}' has invalid color '{}', using opaque black",
                style_id, value
            ),
            ExtractionWarning::UnresolvedStyle { folder, style_url } => write!(
                f,
                "folder '{}': style {} not found, using translucent red",
                folder,
                style_url.as_deref().unwrap_or("<none>")
            ),
            ExtractionWarning::NoVertices { folder } => {
                write!(f, "folder '{}' has no vertices, skipped", folder)
            }
            ExtractionWarning::DegenerateBounds { folder, bbox } => write!(
                f,
                "folder '{}' has degenerate bounds [{}, {}, {}, {}], skipped",
                folder, bbox.west, bbox.south, bbox.east, bbox.north
            ),
            ExtractionWarning::FallbackTimestamp { folder, t } => write!(
                f,
                "folder '{}' has no usable time, using current time {}",
                folder, t
            ),
            ExtractionWarning::RenderFailed { folder, reason } => {
                write!(f, "folder '{}' failed to render: {}", folder, reason)
            }
        }
    }
}

/// Result of one extraction run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionReport {
    /// Sorted ascending by `t`; ties keep folder order
    pub segments: Vec<Segment>,
    pub warnings: Vec<ExtractionWarning>,
}

impl ExtractionReport {
    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
