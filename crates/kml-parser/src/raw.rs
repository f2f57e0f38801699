//! Serde mirror of the KML subset HYSPLIT emits.
//!
//! Only the elements needed to build styled polygons are declared; every
//! other element (`LookAt`, `StyleMap`, `ScreenOverlay`, `LineStyle`, ...)
//! is skipped by the deserializer.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct Kml {
    #[serde(rename = "Document")]
    pub document: RawDocument,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawDocument {
    #[serde(rename = "Style", default)]
    pub styles: Vec<RawStyle>,
    #[serde(rename = "Folder", default)]
    pub folders: Vec<RawFolder>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawStyle {
    #[serde(rename = "@id", default)]
    pub id: String,
    #[serde(rename = "PolyStyle", default)]
    pub poly_style: Option<RawPolyStyle>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawPolyStyle {
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawFolder {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "TimeSpan", default)]
    pub time_span: Option<RawTimeSpan>,
    #[serde(rename = "Placemark", default)]
    pub placemarks: Vec<RawPlacemark>,
    #[serde(rename = "Folder", default)]
    pub folders: Vec<RawFolder>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawTimeSpan {
    #[serde(default)]
    pub begin: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawPlacemark {
    #[serde(rename = "styleUrl", default)]
    pub style_url: Option<String>,
    #[serde(rename = "Polygon", default)]
    pub polygons: Vec<RawPolygon>,
    #[serde(rename = "MultiGeometry", default)]
    pub multi_geometry: Option<RawMultiGeometry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawMultiGeometry {
    #[serde(rename = "Polygon", default)]
    pub polygons: Vec<RawPolygon>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawPolygon {
    #[serde(rename = "outerBoundaryIs", default)]
    pub outer_boundary: Option<RawBoundary>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawBoundary {
    #[serde(rename = "LinearRing", default)]
    pub linear_ring: Option<RawLinearRing>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawLinearRing {
    #[serde(default)]
    pub coordinates: String,
}
