//! Helpers for inspecting rendered output in tests.

use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine as _};
use std::io::Write;

/// PNG file signature.
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Decode a `data:image/png;base64,` URI into raw bytes.
///
/// Returns `None` if the prefix is missing or the payload is not valid base64.
pub fn decode_png_data_uri(uri: &str) -> Option<Vec<u8>> {
    let payload = uri.strip_prefix("data:image/png;base64,")?;
    BASE64_STANDARD.decode(payload).ok()
}

/// Read `(width, height)` from a PNG's IHDR chunk.
pub fn png_dimensions(png: &[u8]) -> Option<(u32, u32)> {
    if png.len() < 24 || png[0..8] != PNG_SIGNATURE || &png[12..16] != b"IHDR" {
        return None;
    }
    let width = u32::from_be_bytes([png[16], png[17], png[18], png[19]]);
    let height = u32::from_be_bytes([png[20], png[21], png[22], png[23]]);
    Some((width, height))
}

/// Read the color type byte from a PNG's IHDR chunk.
pub fn png_color_type(png: &[u8]) -> Option<u8> {
    png_dimensions(png)?;
    png.get(25).copied()
}

/// Write `contents` to a temporary `.kml` file that lives as long as the handle.
pub fn write_temp_kml(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".kml")
        .tempfile()
        .expect("create temp kml");
    file.write_all(contents.as_bytes()).expect("write temp kml");
    file.flush().expect("flush temp kml");
    file
}
