//! Style table: `#id` references to decoded fill colors.

use kml_parser::StyleEntry;
use overlay_common::Rgba;
use std::collections::HashMap;
use tracing::warn;

use crate::segment::ExtractionWarning;

/// Immutable lookup from a `styleUrl` (e.g. `"#conc1"`) to its fill color.
#[derive(Debug, Clone, Default)]
pub struct StyleTable {
    fills: HashMap<String, Rgba>,
}

impl StyleTable {
    /// Build the table from document styles.
    ///
    /// Later styles with the same id replace earlier ones. Malformed colors
    /// decode to opaque black and produce an `InvalidColor` warning. A style
    /// without a `PolyStyle/color` reads as an empty color, so it is black too.
    pub fn build(styles: &[StyleEntry]) -> (Self, Vec<ExtractionWarning>) {
        let mut fills = HashMap::with_capacity(styles.len());
        let mut warnings = Vec::new();

        for style in styles {
            let raw = style.fill.as_deref().unwrap_or("");
            let color = match Rgba::from_kml_hex(raw) {
                Some(color) => color,
                None => {
                    warn!(style_id = %style.id, value = raw, "Invalid style color");
                    warnings.push(ExtractionWarning::InvalidColor {
                        style_id: style.id.clone(),
                        value: raw.to_string(),
                    });
                    Rgba::BLACK
                }
            };
            fills.insert(format!("#{}", style.id), color);
        }

        (Self { fills }, warnings)
    }

    /// Look up a placemark's `styleUrl`.
    pub fn resolve(&self, style_url: Option<&str>) -> Option<Rgba> {
        style_url.and_then(|url| self.fills.get(url).copied())
    }

    pub fn len(&self) -> usize {
        self.fills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fills.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, fill: Option<&str>) -> StyleEntry {
        StyleEntry {
            id: id.to_string(),
            fill: fill.map(str::to_string),
        }
    }

    #[test]
    fn test_keys_are_hash_prefixed() {
        let (table, warnings) = StyleTable::build(&[entry("conc1", Some("80FF0000"))]);
        assert!(warnings.is_empty());
        assert_eq!(table.resolve(Some("#conc1")), Some(Rgba::new(0, 0, 255, 128)));
        assert_eq!(table.resolve(Some("conc1")), None);
        assert_eq!(table.resolve(None), None);
    }

    #[test]
    fn test_last_duplicate_wins() {
        let (table, _) = StyleTable::build(&[
            entry("a", Some("ff0000ff")),
            entry("a", Some("ff00ff00")),
        ]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.resolve(Some("#a")), Some(Rgba::new(0, 255, 0, 255)));
    }

    #[test]
    fn test_malformed_color_is_black_with_warning() {
        let (table, warnings) = StyleTable::build(&[entry("bad", Some("fff"))]);
        assert_eq!(table.resolve(Some("#bad")), Some(Rgba::BLACK));
        assert_eq!(
            warnings,
            vec![ExtractionWarning::InvalidColor {
                style_id: "bad".to_string(),
                value: "fff".to_string(),
            }]
        );
    }

    #[test]
    fn test_style_without_fill_is_black() {
        let (table, warnings) = StyleTable::build(&[entry("line", None)]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.resolve(Some("#line")), Some(Rgba::BLACK));
        assert_eq!(
            warnings,
            vec![ExtractionWarning::InvalidColor {
                style_id: "line".to_string(),
                value: String::new(),
            }]
        );
    }
}
