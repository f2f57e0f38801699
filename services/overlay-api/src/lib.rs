//! Dispersion overlay HTTP service.
//!
//! Routes:
//! - `GET /` - greeting
//! - `GET /health` - health check
//! - `POST /segments` - KML to time-sorted PNG segments
//! - `POST /control` - simulation payload to CONTROL file

pub mod handlers;
pub mod state;

use axum::{
    extract::{DefaultBodyLimit, Extension},
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub use state::AppState;

/// KML exports for long runs can be tens of megabytes.
const MAX_BODY_BYTES: usize = 64 * 1024 * 1024;

/// Build the HTTP router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::hello_handler))
        .route("/health", get(handlers::health_handler))
        .route("/segments", post(handlers::segments_handler))
        .route("/control", post(handlers::control_handler))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
}

/// Bind `addr` and serve until the process exits.
pub async fn start_server(state: Arc<AppState>, addr: SocketAddr) -> anyhow::Result<()> {
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(address = %addr, "Listening");
    axum::serve(listener, app).await?;

    Ok(())
}
