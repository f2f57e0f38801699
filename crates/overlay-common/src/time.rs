//! Time parsing helpers for simulation output.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use regex::Regex;
use std::sync::OnceLock;

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse an ISO 8601 timestamp as it appears in KML `TimeSpan/begin`.
///
/// Accepts RFC 3339 (`2024-01-15T12:00:00Z`, offsets allowed), a zone-less
/// datetime with a `T` or space separator and optional fractional seconds
/// (assumed UTC) and a bare date (midnight UTC).
pub fn parse_iso8601(s: &str) -> Result<DateTime<Utc>, TimeParseError> {
    let s = s.trim();

    // Try full datetime with timezone
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    // Try without timezone (assume UTC)
    for format in NAIVE_FORMATS {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(Utc.from_utc_datetime(&ndt));
        }
    }

    // Try date only
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(ndt) = date.and_hms_opt(0, 0, 0) {
            return Ok(Utc.from_utc_datetime(&ndt));
        }
    }

    Err(TimeParseError::InvalidFormat(s.to_string()))
}

fn valid_stamp_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"Valid:(\d{8})\s+(\d{4})").expect("static regex"))
}

/// Find a `Valid:YYYYMMDD HHMM` stamp in a folder name and parse it as UTC.
///
/// HYSPLIT labels each concentration folder this way, e.g.
/// `"Concentration (Valid:20240101 1200)"`.
pub fn parse_valid_stamp(name: &str) -> Option<DateTime<Utc>> {
    let caps = valid_stamp_regex().captures(name)?;
    let stamp = format!("{} {}", &caps[1], &caps[2]);
    let ndt = NaiveDateTime::parse_from_str(&stamp, "%Y%m%d %H%M").ok()?;
    Some(Utc.from_utc_datetime(&ndt))
}

#[derive(Debug, thiserror::Error)]
pub enum TimeParseError {
    #[error("Invalid time format: {0}")]
    InvalidFormat(String),
}
