//! Builders for synthetic KML documents.
//!
//! The generated markup mirrors the layout HYSPLIT writes: a `Document` with
//! a style table followed by one `Folder` per output time step, each holding
//! placemarks whose polygons live inside a `MultiGeometry`.

/// A folder (time step) in a generated document.
#[derive(Debug, Clone, Default)]
pub struct FolderSpec {
    pub name: String,
    pub begin: Option<String>,
    pub placemarks: Vec<PlacemarkSpec>,
}

impl FolderSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the `TimeSpan/begin` value.
    pub fn begin(mut self, begin: impl Into<String>) -> Self {
        self.begin = Some(begin.into());
        self
    }

    pub fn placemark(mut self, placemark: PlacemarkSpec) -> Self {
        self.placemarks.push(placemark);
        self
    }
}

/// A placemark with an optional style reference and raw coordinate strings.
#[derive(Debug, Clone, Default)]
pub struct PlacemarkSpec {
    pub style_url: Option<String>,
    pub polygons: Vec<String>,
}

impl PlacemarkSpec {
    pub fn styled(style_url: impl Into<String>) -> Self {
        Self {
            style_url: Some(style_url.into()),
            polygons: Vec::new(),
        }
    }

    pub fn unstyled() -> Self {
        Self::default()
    }

    /// Add a polygon from a raw `coordinates` string.
    pub fn polygon(mut self, coordinates: impl Into<String>) -> Self {
        self.polygons.push(coordinates.into());
        self
    }

    /// Add a polygon from `(lon, lat)` vertices.
    pub fn ring(self, points: &[(f64, f64)]) -> Self {
        self.polygon(ring_coordinates(points))
    }
}

/// Fluent builder for a complete KML document.
#[derive(Debug, Clone, Default)]
pub struct KmlBuilder {
    styles: Vec<(String, Option<String>)>,
    folders: Vec<FolderSpec>,
}

impl KmlBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a `Style` with a `PolyStyle/color`.
    pub fn style(mut self, id: impl Into<String>, color: impl Into<String>) -> Self {
        self.styles.push((id.into(), Some(color.into())));
        self
    }

    /// Add a `Style` that only carries a line style.
    pub fn style_without_fill(mut self, id: impl Into<String>) -> Self {
        self.styles.push((id.into(), None));
        self
    }

    pub fn folder(mut self, folder: FolderSpec) -> Self {
        self.folders.push(folder);
        self
    }

    /// Render the document as KML text.
    pub fn build(&self) -> String {
        let mut out = String::new();
        out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        out.push_str("<kml xmlns=\"http://www.opengis.net/kml/2.2\">\n");
        out.push_str("<Document>\n");
        out.push_str("  <name>NOAA HYSPLIT RESULTS</name>\n");
        out.push_str("  <open>1</open>\n");

        for (id, color) in &self.styles {
            out.push_str(&format!("  <Style id=\"{}\">\n", escape(id)));
            out.push_str("    <LineStyle><color>ff000000</color><width>1</width></LineStyle>\n");
            if let Some(color) = color {
                out.push_str(&format!(
                    "    <PolyStyle><color>{}</color></PolyStyle>\n",
                    escape(color)
                ));
            }
            out.push_str("  </Style>\n");
        }

        for folder in &self.folders {
            out.push_str("  <Folder>\n");
            out.push_str(&format!("    <name>{}</name>\n", escape(&folder.name)));
            if let Some(begin) = &folder.begin {
                out.push_str(&format!(
                    "    <TimeSpan><begin>{}</begin></TimeSpan>\n",
                    escape(begin)
                ));
            }
            for placemark in &folder.placemarks {
                out.push_str("    <Placemark>\n");
                if let Some(style_url) = &placemark.style_url {
                    out.push_str(&format!(
                        "      <styleUrl>{}</styleUrl>\n",
                        escape(style_url)
                    ));
                }
                out.push_str("      <MultiGeometry>\n");
                for coordinates in &placemark.polygons {
                    out.push_str("        <Polygon><extrude>1</extrude><altitudeMode>relativeToGround</altitudeMode>\n");
                    out.push_str("          <outerBoundaryIs><LinearRing><coordinates>\n");
                    out.push_str(&format!("            {}\n", escape(coordinates)));
                    out.push_str("          </coordinates></LinearRing></outerBoundaryIs>\n");
                    out.push_str("        </Polygon>\n");
                }
                out.push_str("      </MultiGeometry>\n");
                out.push_str("    </Placemark>\n");
            }
            out.push_str("  </Folder>\n");
        }

        out.push_str("</Document>\n");
        out.push_str("</kml>\n");
        out
    }
}

/// Format `(lon, lat)` vertices as a KML coordinate string with zero altitude.
pub fn ring_coordinates(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(lon, lat)| format!("{},{},0", lon, lat))
        .collect::<Vec<_>>()
        .join(" ")
}

/// A closed axis-aligned square ring centred on `(lon, lat)`.
pub fn square_ring(lon: f64, lat: f64, half_size: f64) -> Vec<(f64, f64)> {
    vec![
        (lon - half_size, lat - half_size),
        (lon + half_size, lat - half_size),
        (lon + half_size, lat + half_size),
        (lon - half_size, lat + half_size),
        (lon - half_size, lat - half_size),
    ]
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
