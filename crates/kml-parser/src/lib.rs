//! KML parser for HYSPLIT dispersion output.
//!
//! Decodes the subset of KML needed to rasterize concentration footprints:
//! the document style table and the folders of styled polygons, one folder
//! per simulated time step.
//!
//! # Failure model
//!
//! Only whole-document problems are errors here: an unreadable file, a
//! document missing its closing `</kml>` tag, or markup that cannot be
//! decoded into a `Document`. Malformed coordinates or colors inside an
//! otherwise valid document are left for the caller to handle.

pub mod coordinates;
pub mod error;
pub mod model;
mod raw;

use std::path::Path;
use tracing::debug;

pub use coordinates::parse_coordinates;
pub use error::{KmlError, KmlResult};
pub use model::{Document, Folder, Placemark, Polygon, StyleEntry};

/// Check that the trimmed document ends with its closing root tag.
///
/// HYSPLIT writes the KML incrementally, so a run that is still going (or
/// died) leaves a truncated file that would otherwise decode partially.
pub fn ensure_complete(text: &str) -> KmlResult<&str> {
    let trimmed = text.trim();
    if !trimmed.ends_with("</kml>") {
        return Err(KmlError::Truncated);
    }
    Ok(trimmed)
}

/// Parse a complete KML document from text.
pub fn parse_str(text: &str) -> KmlResult<Document> {
    let text = ensure_complete(text)?;
    let kml: raw::Kml = quick_xml::de::from_str(text)?;
    let document = Document::from(kml.document);

    debug!(
        styles = document.styles.len(),
        folders = document.folders.len(),
        "Parsed KML document"
    );

    Ok(document)
}

/// Read a KML file fully and parse it.
///
/// The file handle is closed before parsing begins.
pub fn read_file(path: impl AsRef<Path>) -> KmlResult<Document> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = text.len(), "Read KML file");
    parse_str(&text)
}
