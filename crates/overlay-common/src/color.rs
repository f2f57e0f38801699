//! RGBA colors and KML color decoding.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A straight (non-premultiplied) 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque black, used for outlines and for style colors that fail to decode.
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);

    /// Translucent red, used for placemarks whose style cannot be resolved.
    pub const UNRESOLVED: Rgba = Rgba::new(255, 0, 0, 128);

    /// Decode a KML `aabbggrr` hex color.
    ///
    /// KML orders the channels alpha, blue, green, red. Returns `None` unless
    /// the string is exactly eight hex digits. Surrounding whitespace from
    /// pretty-printed KML is trimmed before the length check, so
    /// `" 80FF0000\n"` decodes.
    pub fn from_kml_hex(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let channel = |i: usize| u8::from_str_radix(&s[i..i + 2], 16).ok();
        let a = channel(0)?;
        let b = channel(2)?;
        let g = channel(4)?;
        let r = channel(6)?;

        Some(Self { r, g, b, a })
    }

    /// Decode a KML color, substituting opaque black when it is malformed.
    pub fn from_kml_hex_or_black(s: &str) -> Self {
        Self::from_kml_hex(s).unwrap_or(Self::BLACK)
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.r, self.g, self.b, self.a
        )
    }
}
