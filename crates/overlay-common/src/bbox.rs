//! Geographic bounding box types and operations.

use serde::{Deserialize, Serialize};

/// An axis-aligned geographic bounding box in degrees.
///
/// Serializes with the field names used by web-map image overlays
/// (`west`, `south`, `east`, `north`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl BoundingBox {
    /// Create a new bounding box from its edges.
    pub fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            west,
            south,
            east,
            north,
        }
    }

    /// Compute the tightest box covering every `(lon, lat)` point.
    ///
    /// Returns `None` for an empty point set.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut iter = points.into_iter();
        let (lon, lat) = iter.next()?;
        let mut bbox = Self::new(lon, lat, lon, lat);
        for (lon, lat) in iter {
            bbox.extend(lon, lat);
        }
        Some(bbox)
    }

    /// Grow the box so it contains `(lon, lat)`.
    pub fn extend(&mut self, lon: f64, lat: f64) {
        self.west = self.west.min(lon);
        self.east = self.east.max(lon);
        self.south = self.south.min(lat);
        self.north = self.north.max(lat);
    }

    /// Width of the box in degrees of longitude.
    pub fn width(&self) -> f64 {
        self.east - self.west
    }

    /// Height of the box in degrees of latitude.
    pub fn height(&self) -> f64 {
        self.north - self.south
    }

    /// True when the box has zero width or zero height.
    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Check if a point is contained within this bbox (edges inclusive).
    pub fn contains_point(&self, lon: f64, lat: f64) -> bool {
        lon >= self.west && lon <= self.east && lat >= self.south && lat <= self.north
    }
}
