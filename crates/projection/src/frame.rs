//! Per-extent affine mapping from geographic degrees to canvas pixels.

use overlay_common::BoundingBox;

use crate::error::{ProjectionError, ProjectionResult};
use crate::mercator::{lat_to_y, lon_to_x};

/// Maps a geographic bounding box onto a `size` x `size` pixel canvas.
///
/// The box's west edge lands on pixel x = 0, east on x = size, north on
/// y = 0 and south on y = size. Interior points are placed by their
/// web-Mercator position, so the image lines up with a Mercator basemap
/// when stretched over the same bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelFrame {
    bbox: BoundingBox,
    size: u32,
    /// World X of the west edge
    min_x: f64,
    /// World Y of the north edge (smallest Y)
    min_y: f64,
    /// Pixels per world unit horizontally
    scale_x: f64,
    /// Pixels per world unit vertically
    scale_y: f64,
}

impl PixelFrame {
    /// Build the frame for `bbox` on a square canvas of side `size`.
    ///
    /// Fails when the projected extent has no area, which happens when every
    /// vertex shares a longitude or a latitude.
    pub fn new(bbox: &BoundingBox, size: u32) -> ProjectionResult<Self> {
        if size == 0 {
            return Err(ProjectionError::InvalidSize(size));
        }
        for (edge, value) in [
            ("west", bbox.west),
            ("south", bbox.south),
            ("east", bbox.east),
            ("north", bbox.north),
        ] {
            if !value.is_finite() {
                return Err(ProjectionError::NonFinite(format!("{} = {}", edge, value)));
            }
        }

        let min_x = lon_to_x(bbox.west);
        let max_x = lon_to_x(bbox.east);
        // Y is inverted in Mercator: north has the smaller value.
        let min_y = lat_to_y(bbox.north);
        let max_y = lat_to_y(bbox.south);

        let width = max_x - min_x;
        let height = max_y - min_y;
        if !(width > 0.0 && height > 0.0) {
            return Err(ProjectionError::DegenerateExtent { width, height });
        }

        let side = size as f64;
        Ok(Self {
            bbox: *bbox,
            size,
            min_x,
            min_y,
            scale_x: side / width,
            scale_y: side / height,
        })
    }

    /// Project `(lon, lat)` to pixel `(x, y)`.
    #[inline]
    pub fn project(&self, lon: f64, lat: f64) -> (f64, f64) {
        (
            (lon_to_x(lon) - self.min_x) * self.scale_x,
            (lat_to_y(lat) - self.min_y) * self.scale_y,
        )
    }

    /// Project a ring of `(lon, lat)` vertices.
    pub fn project_ring(&self, ring: &[(f64, f64)]) -> Vec<(f64, f64)> {
        ring.iter().map(|&(lon, lat)| self.project(lon, lat)).collect()
    }

    pub fn bbox(&self) -> &BoundingBox {
        &self.bbox
    }

    pub fn size(&self) -> u32 {
        self.size
    }
}
