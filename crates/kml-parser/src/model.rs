//! Parsed document model.
//!
//! These are the transient values the extraction pipeline walks: they are
//! built fresh from one document and dropped once segments are produced.

use crate::coordinates::parse_coordinates;
use crate::raw::{RawDocument, RawFolder, RawPlacemark, RawPolygon};

/// One closed outer ring of `(lon, lat)` vertices. Holes are not modelled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    pub ring: Vec<(f64, f64)>,
}

impl Polygon {
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }
}

/// A styled feature holding one or more polygons.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Placemark {
    /// Raw `styleUrl`, e.g. `"#conc1"`.
    pub style_url: Option<String>,
    pub polygons: Vec<Polygon>,
}

/// One simulated time step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Folder {
    pub name: String,
    /// Raw `TimeSpan/begin` text, if present.
    pub time_begin: Option<String>,
    pub placemarks: Vec<Placemark>,
}

impl Folder {
    /// Iterate every vertex of every polygon in the folder.
    pub fn vertices(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.placemarks
            .iter()
            .flat_map(|pm| pm.polygons.iter())
            .flat_map(|poly| poly.ring.iter().copied())
    }

    pub fn vertex_count(&self) -> usize {
        self.placemarks
            .iter()
            .flat_map(|pm| pm.polygons.iter())
            .map(|poly| poly.ring.len())
            .sum()
    }
}

/// A `Style` entry: identifier plus the raw `PolyStyle/color` text.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleEntry {
    pub id: String,
    pub fill: Option<String>,
}

/// A decoded KML document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub styles: Vec<StyleEntry>,
    /// Folders flattened depth-first in document order; a parent folder
    /// precedes the folders nested inside it.
    pub folders: Vec<Folder>,
}

impl From<RawDocument> for Document {
    fn from(raw: RawDocument) -> Self {
        let styles = raw
            .styles
            .into_iter()
            .map(|s| StyleEntry {
                id: s.id,
                fill: s.poly_style.and_then(|p| p.color),
            })
            .collect();

        let mut folders = Vec::new();
        for folder in raw.folders {
            flatten_folder(folder, &mut folders);
        }

        Self { styles, folders }
    }
}

fn flatten_folder(raw: RawFolder, out: &mut Vec<Folder>) {
    let folder = Folder {
        name: raw.name.trim().to_string(),
        time_begin: raw
            .time_span
            .and_then(|ts| ts.begin)
            .map(|b| b.trim().to_string())
            .filter(|b| !b.is_empty()),
        placemarks: raw.placemarks.into_iter().map(convert_placemark).collect(),
    };
    out.push(folder);

    for child in raw.folders {
        flatten_folder(child, out);
    }
}

fn convert_placemark(raw: RawPlacemark) -> Placemark {
    let nested = raw
        .multi_geometry
        .map(|mg| mg.polygons)
        .unwrap_or_default();

    let polygons = raw
        .polygons
        .into_iter()
        .chain(nested)
        .map(convert_polygon)
        .collect();

    Placemark {
        style_url: raw
            .style_url
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty()),
        polygons,
    }
}

fn convert_polygon(raw: RawPolygon) -> Polygon {
    let coordinates = raw
        .outer_boundary
        .and_then(|b| b.linear_ring)
        .map(|r| r.coordinates)
        .unwrap_or_default();

    Polygon {
        ring: parse_coordinates(&coordinates),
    }
}
