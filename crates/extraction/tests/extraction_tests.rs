//! End-to-end extraction tests over generated KML documents.

use chrono::{TimeZone, Utc};
use extraction::{
    extract_from_path, extract_from_str, ExtractionConfig, ExtractionError, ExtractionWarning,
    Extractor, FixedClock,
};
use kml_parser::KmlError;
use overlay_common::BoundingBox;
use test_utils::fixtures::{self, coordinates, time};
use test_utils::{
    decode_png_data_uri, png_dimensions, square_ring, write_temp_kml, FolderSpec, KmlBuilder,
    PlacemarkSpec,
};

fn small_config() -> ExtractionConfig {
    ExtractionConfig {
        canvas_size: 64,
        ..ExtractionConfig::default()
    }
}

fn square_folder(name: &str, begin: &str, lon: f64) -> FolderSpec {
    FolderSpec::new(name)
        .begin(begin)
        .placemark(PlacemarkSpec::styled("#s").ring(&square_ring(lon, 40.0, 0.5)))
}

// ============================================================================
// Core properties
// ============================================================================

#[test]
fn test_end_to_end_example() {
    let report =
        extract_from_str(&fixtures::end_to_end_kml(), &ExtractionConfig::default()).unwrap();

    assert_eq!(report.segments.len(), 1);
    assert!(report.warnings.is_empty(), "{:?}", report.warnings);

    let segment = &report.segments[0];
    assert_eq!(segment.t, time::REFERENCE_EPOCH);
    assert_eq!(segment.bbox, BoundingBox::new(-100.0, 40.0, -99.0, 41.0));

    let png = decode_png_data_uri(&segment.base64).expect("valid data URI");
    assert!(!png.is_empty());
    assert_eq!(png_dimensions(&png), Some((1024, 1024)));
}

#[test]
fn test_folder_name_filter() {
    let kml = KmlBuilder::new()
        .style("s", fixtures::colors::OPAQUE_GREEN)
        .folder(square_folder("Concentration_Level_500m", time::REFERENCE_TIME, 0.0))
        .folder(square_folder("Wind_Barbs", time::REFERENCE_TIME, 1.0))
        .build();
    let report = extract_from_str(&kml, &small_config()).unwrap();

    assert_eq!(report.segments.len(), 1);
    assert_eq!(report.segments[0].bbox.west, -0.5);
}

#[test]
fn test_custom_folder_filter() {
    let kml = KmlBuilder::new()
        .folder(square_folder("Deposition 1", time::REFERENCE_TIME, 0.0))
        .folder(square_folder("Concentration 1", time::REFERENCE_TIME, 1.0))
        .build();
    let config = ExtractionConfig {
        folder_filter: "Deposition".to_string(),
        ..small_config()
    };
    let report = extract_from_str(&kml, &config).unwrap();

    assert_eq!(report.segments.len(), 1);
    assert_eq!(report.segments[0].bbox.west, -0.5);
}

#[test]
fn test_segments_sorted_and_ties_stable() {
    let kml = KmlBuilder::new()
        .style("s", fixtures::colors::HALF_RED)
        .folder(square_folder("Concentration C", "2024-01-01T18:00:00Z", 3.0))
        .folder(square_folder("Concentration A1", "2024-01-01T06:00:00Z", 1.0))
        .folder(square_folder("Concentration B", "2024-01-01T12:00:00Z", 2.0))
        .folder(square_folder("Concentration A2", "2024-01-01T06:00:00Z", 4.0))
        .build();
    let report = extract_from_str(&kml, &small_config()).unwrap();

    let times: Vec<i64> = report.segments.iter().map(|s| s.t).collect();
    assert!(times.windows(2).all(|w| w[0] <= w[1]));

    let wests: Vec<f64> = report.segments.iter().map(|s| s.bbox.west).collect();
    assert_eq!(wests, vec![0.5, 3.5, 1.5, 2.5]);
}

#[test]
fn test_parallel_matches_sequential() {
    let mut builder = KmlBuilder::new().style("s", fixtures::colors::HALF_RED);
    for hour in (0..12).rev() {
        let begin = format!("2024-01-01T{:02}:00:00Z", hour % 6);
        builder = builder.folder(square_folder(
            &format!("Concentration {}", hour),
            &begin,
            hour as f64,
        ));
    }
    let kml = builder.build();

    let parallel = extract_from_str(&kml, &small_config()).unwrap();
    let sequential = extract_from_str(
        &kml,
        &ExtractionConfig {
            parallel: false,
            ..small_config()
        },
    )
    .unwrap();

    assert_eq!(parallel.segments.len(), 12);
    assert_eq!(parallel, sequential);
}

// ============================================================================
// Recoverable problems
// ============================================================================

#[test]
fn test_repeated_point_is_skipped() {
    let kml = KmlBuilder::new()
        .style("s", fixtures::colors::HALF_RED)
        .folder(
            FolderSpec::new("Concentration 1")
                .placemark(PlacemarkSpec::styled("#s").polygon(coordinates::REPEATED_POINT)),
        )
        .build();
    let report = extract_from_str(&kml, &small_config()).unwrap();

    assert!(report.segments.is_empty());
    assert!(matches!(
        &report.warnings[..],
        [ExtractionWarning::DegenerateBounds { folder, bbox }]
            if folder == "Concentration 1" && bbox.west == 10.0 && bbox.north == 10.0
    ));
}

#[test]
fn test_folder_without_vertices_is_skipped() {
    let kml = KmlBuilder::new()
        .folder(
            FolderSpec::new("Concentration 1")
                .placemark(PlacemarkSpec::styled("#s").polygon(coordinates::GARBAGE)),
        )
        .folder(FolderSpec::new("Concentration 2"))
        .build();
    let report = extract_from_str(&kml, &small_config()).unwrap();

    assert!(report.segments.is_empty());
    assert_eq!(
        report.warnings,
        vec![
            ExtractionWarning::NoVertices {
                folder: "Concentration 1".to_string()
            },
            ExtractionWarning::NoVertices {
                folder: "Concentration 2".to_string()
            },
        ]
    );
}

#[test]
fn test_bad_folder_does_not_stop_others() {
    let kml = KmlBuilder::new()
        .style("s", fixtures::colors::HALF_RED)
        .folder(
            FolderSpec::new("Concentration bad")
                .placemark(PlacemarkSpec::styled("#s").polygon(coordinates::REPEATED_POINT)),
        )
        .folder(square_folder("Concentration good", time::REFERENCE_TIME, 0.0))
        .build();
    let report = extract_from_str(&kml, &small_config()).unwrap();

    assert_eq!(report.segments.len(), 1);
    assert_eq!(report.warnings.len(), 1);
}

#[test]
fn test_unresolved_and_invalid_styles_still_render() {
    let kml = KmlBuilder::new()
        .style("bad", fixtures::colors::MALFORMED)
        .folder(
            FolderSpec::new("Concentration 1")
                .begin(time::REFERENCE_TIME)
                .placemark(PlacemarkSpec::styled("#bad").polygon(coordinates::TRIANGLE))
                .placemark(PlacemarkSpec::styled("#missing").polygon(coordinates::TRIANGLE))
                .placemark(PlacemarkSpec::unstyled().polygon(coordinates::TRIANGLE)),
        )
        .build();
    let report = extract_from_str(&kml, &small_config()).unwrap();

    assert_eq!(report.segments.len(), 1);
    assert_eq!(
        report.warnings,
        vec![
            ExtractionWarning::InvalidColor {
                style_id: "bad".to_string(),
                value: "fff".to_string(),
            },
            ExtractionWarning::UnresolvedStyle {
                folder: "Concentration 1".to_string(),
                style_url: Some("#missing".to_string()),
            },
            ExtractionWarning::UnresolvedStyle {
                folder: "Concentration 1".to_string(),
                style_url: None,
            },
        ]
    );
}

#[test]
fn test_style_without_fill_resolves_to_black() {
    let kml = KmlBuilder::new()
        .style_without_fill("line")
        .folder(
            FolderSpec::new("Concentration 1")
                .begin(time::REFERENCE_TIME)
                .placemark(PlacemarkSpec::styled("#line").polygon(coordinates::TRIANGLE)),
        )
        .build();
    let report = extract_from_str(&kml, &small_config()).unwrap();

    assert_eq!(report.segments.len(), 1);
    assert_eq!(
        report.warnings,
        vec![ExtractionWarning::InvalidColor {
            style_id: "line".to_string(),
            value: String::new(),
        }]
    );
}

#[test]
fn test_fallback_timestamp_uses_clock_and_warns() {
    let kml = KmlBuilder::new()
        .folder(
            FolderSpec::new("Concentration")
                .placemark(PlacemarkSpec::styled("#s").polygon(coordinates::TRIANGLE)),
        )
        .build();
    let document = kml_parser::parse_str(&kml).unwrap();
    let now = Utc.with_ymd_and_hms(2031, 3, 4, 5, 6, 0).unwrap();
    let extractor = Extractor::with_clock(small_config(), FixedClock(now)).unwrap();

    let report = extractor.extract(&document);

    assert_eq!(report.segments[0].t, now.timestamp());
    assert!(report.warnings.contains(&ExtractionWarning::FallbackTimestamp {
        folder: "Concentration".to_string(),
        t: now.timestamp(),
    }));
}

#[test]
fn test_system_clock_fallback_is_valid_epoch() {
    let kml = KmlBuilder::new()
        .folder(
            FolderSpec::new("Concentration")
                .placemark(PlacemarkSpec::styled("#s").polygon(coordinates::TRIANGLE)),
        )
        .build();
    let report = extract_from_str(&kml, &small_config()).unwrap();

    assert!(report.segments[0].t > 0);
    assert!(report
        .warnings
        .iter()
        .any(|w| matches!(w, ExtractionWarning::FallbackTimestamp { .. })));
}

// ============================================================================
// Options and fatal errors
// ============================================================================

#[test]
fn test_canvas_size_and_outline_options() {
    let config = ExtractionConfig {
        canvas_size: 128,
        stroke_outline: true,
        outline_width: 2.0,
        ..ExtractionConfig::default()
    };
    let report = extract_from_str(&fixtures::end_to_end_kml(), &config).unwrap();
    let png = decode_png_data_uri(&report.segments[0].base64).unwrap();
    assert_eq!(png_dimensions(&png), Some((128, 128)));
}

#[test]
fn test_invalid_config_rejected() {
    let config = ExtractionConfig {
        canvas_size: 0,
        ..ExtractionConfig::default()
    };
    assert!(matches!(
        extract_from_str(&fixtures::end_to_end_kml(), &config),
        Err(ExtractionError::InvalidConfig(_))
    ));
}

#[test]
fn test_truncated_document_is_fatal() {
    let kml = fixtures::end_to_end_kml();
    let truncated = kml.trim_end().trim_end_matches("</kml>");
    assert!(matches!(
        extract_from_str(truncated, &ExtractionConfig::default()),
        Err(ExtractionError::Kml(KmlError::Truncated))
    ));
}

#[test]
fn test_extract_from_path() {
    let file = write_temp_kml(&fixtures::end_to_end_kml());
    let report = extract_from_path(file.path(), &small_config()).unwrap();
    assert_eq!(report.segments.len(), 1);
    assert_eq!(report.segments[0].t, time::REFERENCE_EPOCH);

    assert!(matches!(
        extract_from_path("/nonexistent/HYSPLIT_ps.kml", &small_config()),
        Err(ExtractionError::Kml(KmlError::Io(_)))
    ));
}
