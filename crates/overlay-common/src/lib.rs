//! Common types and utilities shared across the dispersion-overlay crates.

pub mod bbox;
pub mod color;
pub mod error;
pub mod time;

pub use bbox::BoundingBox;
pub use color::Rgba;
pub use error::{OverlayError, OverlayResult};
pub use time::{parse_iso8601, parse_valid_stamp, TimeParseError};
