//! Raster output for dispersion footprints.
//!
//! Projects styled polygons through a [`projection::PixelFrame`], paints
//! them on an anti-aliased canvas and encodes the result as PNG, optionally
//! wrapped in a base64 data URI.

pub mod canvas;
pub mod data_uri;
pub mod error;
pub mod png;
pub mod raster;

pub use canvas::{Canvas, SkiaCanvas};
pub use data_uri::{png_data_uri, PNG_DATA_URI_PREFIX};
pub use error::{RenderError, RenderResult};
pub use raster::{rasterize, rasterize_with, RenderOptions, StyledPolygon};
