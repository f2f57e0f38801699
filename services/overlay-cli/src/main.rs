//! Command-line front end for dispersion overlays.
//!
//! `extract` turns a HYSPLIT KML export into JSON segments; `control` turns
//! a simulation payload into a CONTROL file.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use control_file::{generate_control_file, Payload};
use extraction::{extract_from_path, ExtractionConfig};

#[derive(Parser, Debug)]
#[command(name = "overlay-cli")]
#[command(about = "HYSPLIT dispersion overlay tools")]
struct Cli {
    /// Log level
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render each concentration folder of a KML file as a PNG segment
    Extract {
        /// HYSPLIT KML file
        kml: PathBuf,

        /// Outline polygons in black
        #[arg(long)]
        stroke_outline: bool,

        /// Raster side length in pixels
        #[arg(long)]
        size: Option<u32>,

        /// Process folders on one thread
        #[arg(long)]
        sequential: bool,

        /// Write JSON here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit `{segments, warnings}` instead of the bare segment array
        #[arg(long)]
        with_warnings: bool,
    },

    /// Generate a CONTROL file from a JSON simulation payload
    Control {
        /// Payload JSON file
        payload: PathBuf,

        /// Write the CONTROL file here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Command::Extract {
            kml,
            stroke_outline,
            size,
            sequential,
            output,
            with_warnings,
        } => {
            let mut config = ExtractionConfig::from_env();
            if stroke_outline {
                config.stroke_outline = true;
            }
            if let Some(size) = size {
                config.canvas_size = size;
            }
            if sequential {
                config.parallel = false;
            }

            info!(path = %kml.display(), ?config, "Extracting segments");
            let report = extract_from_path(&kml, &config)
                .with_context(|| format!("failed to process {}", kml.display()))?;

            let count = report.segments.len();
            let json = if with_warnings {
                serde_json::to_string(&report)?
            } else {
                if report.has_warnings() {
                    for warning in &report.warnings {
                        warn!(%warning, "Extraction warning");
                    }
                }
                serde_json::to_string(&report.into_segments())?
            };
            write_output(output.as_deref(), &json)?;

            eprintln!("Successfully processed {} time segments.", count);
        }
        Command::Control { payload, output } => {
            let text = fs::read_to_string(&payload)
                .with_context(|| format!("failed to read {}", payload.display()))?;
            let payload = Payload::from_json(&text)?;
            let control = generate_control_file(&payload)?;
            write_output(output.as_deref(), control.trim_end_matches('\n'))?;
        }
    }

    Ok(())
}

/// Write `text` plus a trailing newline to `path`, or to stdout.
fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, format!("{}\n", text))
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), bytes = text.len(), "Wrote output");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", text)?;
        }
    }
    Ok(())
}
