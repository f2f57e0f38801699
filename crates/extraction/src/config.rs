//! Extraction configuration.

use serde::{Deserialize, Serialize};

use crate::error::{ExtractionError, ExtractionResult};

/// Tunables for one extraction run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Side length of the square output raster, in pixels
    pub canvas_size: u32,
    /// Stroke polygon outlines in black on top of the fill
    pub stroke_outline: bool,
    pub outline_width: f32,
    /// Folders whose name does not contain this substring are ignored
    pub folder_filter: String,
    /// Process folders on the rayon pool
    pub parallel: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            canvas_size: 1024,
            stroke_outline: false,
            outline_width: 1.0,
            folder_filter: "Concentration".to_string(),
            parallel: true,
        }
    }
}

impl ExtractionConfig {
    /// Load configuration from `OVERLAY_*` environment variables, keeping
    /// defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let flag = |key: &str, default: bool| {
            lookup(key)
                .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
                .unwrap_or(default)
        };

        Self {
            canvas_size: lookup("OVERLAY_CANVAS_SIZE")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.canvas_size),
            stroke_outline: flag("OVERLAY_STROKE_OUTLINE", defaults.stroke_outline),
            outline_width: defaults.outline_width,
            folder_filter: lookup("OVERLAY_FOLDER_FILTER").unwrap_or(defaults.folder_filter),
            parallel: flag("OVERLAY_PARALLEL", defaults.parallel),
        }
    }

    pub fn validate(&self) -> ExtractionResult<()> {
        if self.canvas_size == 0 {
            return Err(ExtractionError::InvalidConfig(
                "canvas_size must be greater than zero".to_string(),
            ));
        }
        if !(self.outline_width > 0.0 && self.outline_width.is_finite()) {
            return Err(ExtractionError::InvalidConfig(format!(
                "outline_width must be positive, got {}",
                self.outline_width
            )));
        }
        Ok(())
    }
}
