//! Dispersion overlay API server.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use overlay_api::{start_server, AppState};

#[derive(Parser, Debug)]
#[command(name = "overlay-api")]
#[command(about = "HYSPLIT dispersion overlay API server")]
struct Args {
    /// Listen address; overrides --port
    #[arg(short, long)]
    listen: Option<String>,

    /// Port to bind on all interfaces
    #[arg(long, env = "PORT", default_value_t = 8080)]
    port: u16,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .json()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let addr: SocketAddr = match &args.listen {
        Some(listen) => listen
            .parse()
            .with_context(|| format!("invalid listen address '{}'", listen))?,
        None => SocketAddr::from(([0, 0, 0, 0], args.port)),
    };

    let state = AppState::from_env();
    state.extraction.validate()?;
    info!(
        canvas_size = state.extraction.canvas_size,
        stroke_outline = state.extraction.stroke_outline,
        parallel = state.extraction.parallel,
        timeout_secs = state.request_timeout.as_secs(),
        "Starting dispersion overlay API"
    );

    start_server(Arc::new(state), addr).await
}
