//! HYSPLIT KML to time-sorted raster segments.
//!
//! ```ignore
//! use extraction::{extract_from_path, ExtractionConfig};
//!
//! let report = extract_from_path("HYSPLIT_ps.kml", &ExtractionConfig::default())?;
//! for segment in &report.segments {
//!     println!("{} {:?}", segment.t, segment.bbox);
//! }
//! ```
//!
//! Only unreadable or malformed documents are errors. Per-folder problems
//! are recovered from and listed in [`ExtractionReport::warnings`].

pub mod config;
pub mod error;
pub mod pipeline;
pub mod segment;
pub mod styles;
pub mod timestamp;

pub use config::ExtractionConfig;
pub use error::{ExtractionError, ExtractionResult};
pub use pipeline::{extract_from_path, extract_from_str, Extractor};
pub use segment::{ExtractionReport, ExtractionWarning, Segment};
pub use styles::StyleTable;
pub use timestamp::{
    Clock, FixedClock, ResolvedTime, SystemClock, TimestampResolver, TimestampStrategy,
};
