//! Folder aggregation: document in, sorted segments out.

use kml_parser::{Document, Folder};
use overlay_common::{BoundingBox, Rgba};
use projection::{PixelFrame, ProjectionError};
use rayon::prelude::*;
use renderer::{png_data_uri, rasterize, RenderOptions, StyledPolygon};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::config::ExtractionConfig;
use crate::error::ExtractionResult;
use crate::segment::{ExtractionReport, ExtractionWarning, Segment};
use crate::styles::StyleTable;
use crate::timestamp::{Clock, SystemClock, TimestampResolver};

/// Turns parsed documents into [`ExtractionReport`]s.
pub struct Extractor<C: Clock = SystemClock> {
    config: ExtractionConfig,
    resolver: TimestampResolver,
    clock: C,
}

impl Extractor<SystemClock> {
    pub fn new(config: ExtractionConfig) -> ExtractionResult<Self> {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> Extractor<C> {
    pub fn with_clock(config: ExtractionConfig, clock: C) -> ExtractionResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            resolver: TimestampResolver::default(),
            clock,
        })
    }

    /// Render every qualifying folder and sort the result by time.
    pub fn extract(&self, document: &Document) -> ExtractionReport {
        let start = Instant::now();
        let (styles, mut warnings) = StyleTable::build(&document.styles);

        let folders: Vec<&Folder> = document
            .folders
            .iter()
            .filter(|f| f.name.contains(self.config.folder_filter.as_str()))
            .collect();

        let outcomes: Vec<FolderOutcome> = if self.config.parallel {
            folders
                .par_iter()
                .map(|folder| self.process_folder(folder, &styles))
                .collect()
        } else {
            folders
                .iter()
                .map(|folder| self.process_folder(folder, &styles))
                .collect()
        };

        let mut segments = Vec::with_capacity(outcomes.len());
        for outcome in outcomes {
            warnings.extend(outcome.warnings);
            segments.extend(outcome.segment);
        }
        // Vec::sort_by_key is stable, so equal times keep folder order.
        segments.sort_by_key(|s| s.t);

        info!(
            folders = document.folders.len(),
            qualifying = folders.len(),
            segments = segments.len(),
            warnings = warnings.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Extraction complete"
        );

        ExtractionReport { segments, warnings }
    }

    fn process_folder(&self, folder: &Folder, styles: &StyleTable) -> FolderOutcome {
        let mut outcome = FolderOutcome::default();
        let name = folder.name.as_str();

        let Some(bbox) = BoundingBox::from_points(folder.vertices()) else {
            debug!(folder = name, "Skipping folder without vertices");
            outcome.warn(ExtractionWarning::NoVertices {
                folder: name.to_string(),
            });
            return outcome;
        };

        let frame = match PixelFrame::new(&bbox, self.config.canvas_size) {
            Ok(frame) => frame,
            Err(ProjectionError::DegenerateExtent { .. }) => {
                warn!(folder = name, ?bbox, "Skipping folder with degenerate bounds");
                outcome.warn(ExtractionWarning::DegenerateBounds {
                    folder: name.to_string(),
                    bbox,
                });
                return outcome;
            }
            Err(e) => {
                warn!(folder = name, error = %e, "Skipping folder, no projection frame");
                outcome.warn(ExtractionWarning::RenderFailed {
                    folder: name.to_string(),
                    reason: e.to_string(),
                });
                return outcome;
            }
        };

        let mut polygons = Vec::new();
        for placemark in &folder.placemarks {
            let fill = match styles.resolve(placemark.style_url.as_deref()) {
                Some(color) => color,
                None => {
                    debug!(folder = name, style_url = ?placemark.style_url, "Unresolved style");
                    outcome.warn(ExtractionWarning::UnresolvedStyle {
                        folder: name.to_string(),
                        style_url: placemark.style_url.clone(),
                    });
                    Rgba::UNRESOLVED
                }
            };
            polygons.extend(placemark.polygons.iter().map(|p| StyledPolygon {
                ring: &p.ring,
                fill,
            }));
        }

        let png = match rasterize(&frame, &polygons, &self.render_options()) {
            Ok(png) => png,
            Err(e) => {
                warn!(folder = name, error = %e, "Skipping folder, render failed");
                outcome.warn(ExtractionWarning::RenderFailed {
                    folder: name.to_string(),
                    reason: e.to_string(),
                });
                return outcome;
            }
        };

        let time = self.resolver.resolve(folder, &self.clock);
        if time.is_fallback() {
            warn!(folder = name, t = time.t, "No folder time found, using current time");
            outcome.warn(ExtractionWarning::FallbackTimestamp {
                folder: name.to_string(),
                t: time.t,
            });
        }

        debug!(folder = name, t = time.t, bytes = png.len(), "Rendered segment");
        outcome.segment = Some(Segment {
            t: time.t,
            bbox,
            base64: png_data_uri(&png),
        });
        outcome
    }

    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            stroke_outline: self.config.stroke_outline,
            outline_width: self.config.outline_width,
            outline_color: Rgba::BLACK,
        }
    }
}

#[derive(Default)]
struct FolderOutcome {
    segment: Option<Segment>,
    warnings: Vec<ExtractionWarning>,
}

impl FolderOutcome {
    fn warn(&mut self, warning: ExtractionWarning) {
        self.warnings.push(warning);
    }
}

/// Parse `text` and extract it with `config`.
pub fn extract_from_str(
    text: &str,
    config: &ExtractionConfig,
) -> ExtractionResult<ExtractionReport> {
    let extractor = Extractor::new(config.clone())?;
    let document = kml_parser::parse_str(text)?;
    Ok(extractor.extract(&document))
}

/// Read the file at `path` in full, then parse and extract it.
pub fn extract_from_path(
    path: impl AsRef<Path>,
    config: &ExtractionConfig,
) -> ExtractionResult<ExtractionReport> {
    let extractor = Extractor::new(config.clone())?;
    let document = kml_parser::read_file(path)?;
    Ok(extractor.extract(&document))
}
