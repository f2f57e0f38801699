//! Coordinate transformations from geographic degrees to raster pixels.
//!
//! Implements the spherical web-Mercator projection from scratch without
//! external dependencies, plus the per-extent affine frame used to place a
//! bounding box onto a square canvas.

pub mod error;
pub mod frame;
pub mod mercator;

pub use error::{ProjectionError, ProjectionResult};
pub use frame::PixelFrame;
pub use mercator::{lat_to_y, lon_to_x, MAX_LATITUDE, TILE_SIZE};
