//! Common test fixtures for dispersion-overlay tests.
//!
//! This module provides pre-defined test data that represents common
//! scenarios in HYSPLIT KML processing.

/// Common bounding boxes as (west, south, east, north).
pub mod bbox {
    /// The one-degree triangle used by the end-to-end example.
    pub const SMALL_TRIANGLE: (f64, f64, f64, f64) = (-100.0, 40.0, -99.0, 41.0);

    /// Continental United States
    pub const CONUS: (f64, f64, f64, f64) = (-130.0, 20.0, -60.0, 55.0);

    /// Single point (degenerate bbox)
    pub const POINT: (f64, f64, f64, f64) = (0.0, 0.0, 0.0, 0.0);
}

/// KML `aabbggrr` color strings.
pub mod colors {
    /// 50% alpha, red channel 255 after reversal.
    pub const HALF_RED: &str = "80FF0000";

    /// Opaque green.
    pub const OPAQUE_GREEN: &str = "ff00ff00";

    /// Too short to be a KML color.
    pub const MALFORMED: &str = "fff";
}

/// Coordinate strings as they appear inside `<coordinates>`.
pub mod coordinates {
    /// Closed triangle spanning the `SMALL_TRIANGLE` bbox.
    pub const TRIANGLE: &str = "-100,40 -99,40 -99.5,41 -100,40";

    /// Same triangle with altitude components.
    pub const TRIANGLE_WITH_ALTITUDE: &str = "-100,40,0 -99,40,0 -99.5,41,0 -100,40,0";

    /// A single repeated vertex.
    pub const REPEATED_POINT: &str = "10,10,0 10,10,0 10,10,0";

    /// Nothing parseable.
    pub const GARBAGE: &str = "abc def,ghi ,";
}

/// Common time values for testing.
pub mod time {
    /// A fixed reference time for tests (2024-01-01T12:00:00Z)
    pub const REFERENCE_TIME: &str = "2024-01-01T12:00:00Z";

    /// `REFERENCE_TIME` as Unix seconds.
    pub const REFERENCE_EPOCH: i64 = 1_704_110_400;

    /// Folder name carrying the same instant as a `Valid:` stamp.
    pub const VALID_NAME: &str = "Concentration (Valid:20240101 1200)";
}

/// The end-to-end example document: one qualifying folder with a single
/// styled triangle and no explicit time span.
pub fn end_to_end_kml() -> String {
    crate::KmlBuilder::new()
        .style("conc1", colors::HALF_RED)
        .folder(
            crate::FolderSpec::new(time::VALID_NAME)
                .placemark(crate::PlacemarkSpec::styled("#conc1").polygon(coordinates::TRIANGLE)),
        )
        .build()
}
