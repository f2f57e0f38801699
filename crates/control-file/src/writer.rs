//! CONTROL file rendering.

use chrono::{Datelike, TimeZone, Timelike, Utc};
use tracing::debug;

use crate::error::{ControlFileError, ControlFileResult};
use crate::payload::{Direction, ModelType, Payload, SimulationMeta};

/// Release start written for backward runs.
const BACKWARD_RELEASE_START: &str = "00 00 00 00 0";

const DEPOSITION_BLOCK: [&str; 6] = [
    "1",
    "0.0 0.0 0.0",
    "0.0 0.0 0.0 0.0 0.0",
    "0.0 0.0 0.0",
    "0",
    "0.0",
];

/// Format an epoch as `YY MM DD HH M` in UTC.
pub fn format_hysplit_time(epoch: i64) -> ControlFileResult<String> {
    let t = Utc
        .timestamp_opt(epoch, 0)
        .single()
        .ok_or(ControlFileError::InvalidEpoch(epoch))?;
    Ok(format!(
        "{:02} {:02} {:02} {:02} {}",
        t.year().rem_euclid(100),
        t.month(),
        t.day(),
        t.hour(),
        t.minute()
    ))
}

/// Signed run length in hours; negative for backward runs.
pub fn run_duration_hours(meta: &SimulationMeta) -> f64 {
    let hours = ((meta.end_epoch_utc - meta.start_epoch_utc) as f64 / 3600.0).abs();
    match meta.direction {
        Direction::Forward => hours,
        Direction::Backward => -hours,
    }
}

/// Render `payload` as CONTROL file text, one value group per line.
pub fn generate_control_file(payload: &Payload) -> ControlFileResult<String> {
    if payload.points.is_empty() {
        return Err(ControlFileError::NoPoints);
    }
    if payload.met_files.is_empty() {
        return Err(ControlFileError::NoMetFiles);
    }

    let meta = &payload.simulation_meta;
    let grid = match meta.model_type {
        ModelType::Concentration => match payload.concentration_grids.as_slice() {
            [grid] => Some(grid),
            grids => return Err(ControlFileError::GridCount(grids.len())),
        },
        ModelType::Trajectory => None,
    };

    let start = format_hysplit_time(meta.start_epoch_utc)?;
    let duration = run_duration_hours(meta);
    let mut out = Lines::default();

    out.line(&start);
    out.line(payload.points.len());
    for p in &payload.points {
        out.line(format!(
            "{:.6} {:.6} {:.2}",
            p.latitude, p.longitude, p.height_m_agl
        ));
    }
    out.line(format!("{:.0}", duration));
    out.line(payload.physics_config.vertical_motion_code);
    out.line(format!("{:.0}", payload.physics_config.top_of_model_m_agl));

    out.line(payload.met_files.len());
    for met in &payload.met_files {
        out.line(&met.directory);
        out.line(&met.file_name);
    }

    match grid {
        Some(grid) => {
            // pollutant: count, id, rate, hours, release start
            out.line(1);
            out.line(payload.pollutant_matrix_config.sox.pollutant_id.to_uppercase());
            out.line("1");
            out.line("1.0");
            match meta.direction {
                Direction::Forward => out.line(&start),
                Direction::Backward => out.line(BACKWARD_RELEASE_START),
            }

            // grid: count, center, spacing, span, output file, levels, sampling
            out.line(1);
            out.line(format!("{:.1} {:.1}", grid.center_lat, grid.center_lon));
            out.line(format!("{:.3} {:.3}", grid.spacing_lat, grid.spacing_lon));
            out.line(format!("{} {}", grid.span_lat, grid.span_lon));
            out.line(&meta.output_file.directory);
            out.line(&meta.output_file.file_name);
            out.line(grid.output_levels_m_agl.len());
            let levels: Vec<String> = grid
                .output_levels_m_agl
                .iter()
                .map(|level| format!("{:.0}", level))
                .collect();
            out.line(levels.join(" "));
            out.line(&start);
            out.line(format!("00 00 00 {:02} 00", duration.abs() as i64));
            out.line("0 1 0");

            for line in DEPOSITION_BLOCK {
                out.line(line);
            }
        }
        None => {
            out.line(&meta.output_file.directory);
            out.line(&meta.output_file.file_name);
            out.line(0);
            out.line(100);
        }
    }

    debug!(
        job_id = %payload.job_id,
        model_type = ?meta.model_type,
        direction = ?meta.direction,
        lines = out.count,
        "Generated CONTROL file"
    );

    Ok(out.text)
}

#[derive(Default)]
struct Lines {
    text: String,
    count: usize,
}

impl Lines {
    fn line(&mut self, value: impl std::fmt::Display) {
        self.text.push_str(&value.to_string());
        self.text.push('\n');
        self.count += 1;
    }
}
