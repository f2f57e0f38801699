//! Rasterization surface.

use overlay_common::Rgba;
use tiny_skia::{FillRule, Paint, Path, PathBuilder, Pixmap, Stroke, Transform};

use crate::error::{RenderError, RenderResult};
use crate::png;

/// A square drawing surface addressed in pixel coordinates.
pub trait Canvas {
    /// Open a fully transparent `size` x `size` canvas.
    fn blank(size: u32) -> RenderResult<Self>
    where
        Self: Sized;

    fn size(&self) -> u32;

    /// Fill the closed polygon through `ring` (non-zero winding).
    ///
    /// Returns `false` if the ring has fewer than three vertices or does not
    /// form a drawable path.
    fn fill_polygon(&mut self, ring: &[(f64, f64)], color: Rgba) -> bool;

    /// Stroke the closed outline of `ring`.
    fn stroke_polygon(&mut self, ring: &[(f64, f64)], color: Rgba, width: f32) -> bool;

    /// Straight-alpha RGBA bytes, row-major, 4 bytes per pixel.
    fn to_rgba(&self) -> Vec<u8>;

    fn encode_png(&self) -> RenderResult<Vec<u8>> {
        png::encode_png(&self.to_rgba(), self.size(), self.size())
    }
}

/// Anti-aliased canvas backed by a `tiny_skia::Pixmap`.
pub struct SkiaCanvas {
    pixmap: Pixmap,
}

impl SkiaCanvas {
    fn paint(color: Rgba) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color_rgba8(color.r, color.g, color.b, color.a);
        paint.anti_alias = true;
        paint
    }
}

impl Canvas for SkiaCanvas {
    fn blank(size: u32) -> RenderResult<Self> {
        let pixmap = Pixmap::new(size, size).ok_or(RenderError::CanvasAllocation(size))?;
        Ok(Self { pixmap })
    }

    fn size(&self) -> u32 {
        self.pixmap.width()
    }

    fn fill_polygon(&mut self, ring: &[(f64, f64)], color: Rgba) -> bool {
        let Some(path) = closed_path(ring) else {
            return false;
        };
        self.pixmap.fill_path(
            &path,
            &Self::paint(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
        true
    }

    fn stroke_polygon(&mut self, ring: &[(f64, f64)], color: Rgba, width: f32) -> bool {
        let Some(path) = closed_path(ring) else {
            return false;
        };
        let stroke = Stroke {
            width,
            ..Stroke::default()
        };
        self.pixmap.stroke_path(
            &path,
            &Self::paint(color),
            &stroke,
            Transform::identity(),
            None,
        );
        true
    }

    fn to_rgba(&self) -> Vec<u8> {
        // tiny-skia stores premultiplied pixels; PNG wants straight alpha.
        self.pixmap
            .pixels()
            .iter()
            .flat_map(|px| {
                let c = px.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect()
    }
}

fn closed_path(ring: &[(f64, f64)]) -> Option<Path> {
    if ring.len() < 3 {
        return None;
    }

    let mut pb = PathBuilder::new();
    let (x0, y0) = ring[0];
    pb.move_to(x0 as f32, y0 as f32);
    for &(x, y) in &ring[1..] {
        pb.line_to(x as f32, y as f32);
    }
    pb.close();
    pb.finish()
}
