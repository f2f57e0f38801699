//! Data-URI wrapping for encoded rasters.

use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine as _};

/// Prefix of every PNG data URI produced by this crate.
pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Wrap PNG bytes as a `data:image/png;base64,...` URI.
pub fn png_data_uri(png: &[u8]) -> String {
    let encoded = BASE64_STANDARD.encode(png);
    let mut uri = String::with_capacity(PNG_DATA_URI_PREFIX.len() + encoded.len());
    uri.push_str(PNG_DATA_URI_PREFIX);
    uri.push_str(&encoded);
    uri
}
