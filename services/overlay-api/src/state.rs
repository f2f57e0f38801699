//! Shared application state.

use extraction::ExtractionConfig;
use std::time::Duration;

pub struct AppState {
    /// Defaults for every `/segments` request; query parameters override.
    pub extraction: ExtractionConfig,
    /// Upper bound on one extraction run
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(extraction: ExtractionConfig) -> Self {
        Self {
            extraction,
            request_timeout: Duration::from_secs(60),
        }
    }

    pub fn from_env() -> Self {
        let request_timeout = std::env::var("OVERLAY_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(60));

        Self {
            extraction: ExtractionConfig::from_env(),
            request_timeout,
        }
    }
}
