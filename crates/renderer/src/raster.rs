//! Folder-level rasterization: styled polygons in, PNG bytes out.

use overlay_common::Rgba;
use projection::PixelFrame;
use tracing::debug;

use crate::canvas::{Canvas, SkiaCanvas};
use crate::error::RenderResult;

/// One polygon ring in geographic degrees with its resolved fill color.
#[derive(Debug, Clone, Copy)]
pub struct StyledPolygon<'a> {
    pub ring: &'a [(f64, f64)],
    pub fill: Rgba,
}

/// Drawing options shared by every polygon of a raster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    pub stroke_outline: bool,
    pub outline_width: f32,
    pub outline_color: Rgba,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            stroke_outline: false,
            outline_width: 1.0,
            outline_color: Rgba::BLACK,
        }
    }
}

/// Rasterize polygons onto a tiny-skia canvas sized by `frame`.
pub fn rasterize(
    frame: &PixelFrame,
    polygons: &[StyledPolygon<'_>],
    options: &RenderOptions,
) -> RenderResult<Vec<u8>> {
    rasterize_with::<SkiaCanvas>(frame, polygons, options)
}

/// Rasterize polygons onto any [`Canvas`] implementation.
///
/// Polygons are painted in slice order, so later entries cover earlier ones.
/// Rings with fewer than three vertices are skipped.
pub fn rasterize_with<C: Canvas>(
    frame: &PixelFrame,
    polygons: &[StyledPolygon<'_>],
    options: &RenderOptions,
) -> RenderResult<Vec<u8>> {
    let mut canvas = C::blank(frame.size())?;
    let mut drawn = 0usize;

    for polygon in polygons {
        if polygon.ring.len() < 3 {
            continue;
        }
        let pixels = frame.project_ring(polygon.ring);
        if !canvas.fill_polygon(&pixels, polygon.fill) {
            continue;
        }
        if options.stroke_outline {
            canvas.stroke_polygon(&pixels, options.outline_color, options.outline_width);
        }
        drawn += 1;
    }

    debug!(
        polygons = polygons.len(),
        drawn,
        size = frame.size(),
        "Rasterized polygons"
    );

    canvas.encode_png()
}
