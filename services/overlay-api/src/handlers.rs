//! HTTP handlers.

use axum::{
    extract::{Extension, Query},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use control_file::{generate_control_file, Payload};
use extraction::{extract_from_str, ExtractionReport};
use overlay_common::OverlayError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::state::AppState;

/// Error body: `{"error": "..."}` with the status the error maps to.
pub struct ApiError(OverlayError);

impl<E: Into<OverlayError>> From<E> for ApiError {
    fn from(err: E) -> Self {
        ApiError(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            error!(error = %self.0, "Request failed");
        } else {
            warn!(error = %self.0, "Request rejected");
        }
        (status, Json(ErrorResponse { error: self.0.to_string() })).into_response()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct SegmentsQuery {
    pub stroke_outline: Option<bool>,
}

/// GET /
pub async fn hello_handler() -> &'static str {
    "hello world\n"
}

/// GET /health
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: "overlay-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// POST /segments - KML body in, segment report out
pub async fn segments_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(query): Query<SegmentsQuery>,
    body: String,
) -> Result<Json<ExtractionReport>, ApiError> {
    let mut config = state.extraction.clone();
    if let Some(stroke_outline) = query.stroke_outline {
        config.stroke_outline = stroke_outline;
    }

    info!(bytes = body.len(), stroke_outline = config.stroke_outline, "Received KML");

    let task = tokio::task::spawn_blocking(move || extract_from_str(&body, &config));
    let report = tokio::time::timeout(state.request_timeout, task)
        .await
        .map_err(|_| OverlayError::Timeout)?
        .map_err(|e| OverlayError::InternalError(format!("extraction task failed: {}", e)))??;

    info!(
        segments = report.segments.len(),
        warnings = report.warnings.len(),
        "Extraction finished"
    );

    Ok(Json(report))
}

/// POST /control - JSON payload in, CONTROL file text out
pub async fn control_handler(body: String) -> Result<Response, ApiError> {
    let payload = Payload::from_json(&body)?;
    let text = generate_control_file(&payload)?;

    info!(job_id = %payload.job_id, lines = text.lines().count(), "Generated CONTROL file");

    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        text,
    )
        .into_response())
}
