//! Folder time resolution.
//!
//! Strategies are tried in priority order and the first one that yields a
//! time wins. When none does, the injected [`Clock`] supplies the time and
//! the result is flagged as a fallback.

use chrono::{DateTime, Utc};
use kml_parser::Folder;
use overlay_common::{parse_iso8601, parse_valid_stamp};

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// A single way of reading a folder's time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampStrategy {
    /// ISO-8601 `TimeSpan/begin`
    TimeSpanBegin,
    /// `Valid:YYYYMMDD HHMM` inside the folder name
    ValidStamp,
}

impl TimestampStrategy {
    pub fn resolve(self, folder: &Folder) -> Option<i64> {
        match self {
            TimestampStrategy::TimeSpanBegin => folder
                .time_begin
                .as_deref()
                .and_then(|begin| parse_iso8601(begin).ok())
                .map(|dt| dt.timestamp()),
            TimestampStrategy::ValidStamp => {
                parse_valid_stamp(&folder.name).map(|dt| dt.timestamp())
            }
        }
    }
}

/// Outcome of resolving one folder's time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedTime {
    pub t: i64,
    /// Strategy that produced `t`; `None` when the clock was used
    pub strategy: Option<TimestampStrategy>,
}

impl ResolvedTime {
    pub fn is_fallback(&self) -> bool {
        self.strategy.is_none()
    }
}

/// Ordered list of strategies.
#[derive(Debug, Clone)]
pub struct TimestampResolver {
    strategies: Vec<TimestampStrategy>,
}

impl Default for TimestampResolver {
    fn default() -> Self {
        Self::new(vec![
            TimestampStrategy::TimeSpanBegin,
            TimestampStrategy::ValidStamp,
        ])
    }
}

impl TimestampResolver {
    pub fn new(strategies: Vec<TimestampStrategy>) -> Self {
        Self { strategies }
    }

    pub fn resolve(&self, folder: &Folder, clock: &dyn Clock) -> ResolvedTime {
        self.strategies
            .iter()
            .find_map(|&strategy| {
                strategy.resolve(folder).map(|t| ResolvedTime {
                    t,
                    strategy: Some(strategy),
                })
            })
            .unwrap_or_else(|| ResolvedTime {
                t: clock.now().timestamp(),
                strategy: None,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn folder(name: &str, begin: Option<&str>) -> Folder {
        Folder {
            name: name.to_string(),
            time_begin: begin.map(str::to_string),
            placemarks: Vec::new(),
        }
    }

    fn clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2030, 6, 1, 0, 0, 0).unwrap())
    }

    #[test]
    fn test_time_span_begin_strategy() {
        let f = folder("Concentration", Some("2024-01-01T12:00:00Z"));
        assert_eq!(TimestampStrategy::TimeSpanBegin.resolve(&f), Some(1_704_110_400));
        assert_eq!(TimestampStrategy::ValidStamp.resolve(&f), None);
    }

    #[test]
    fn test_valid_stamp_strategy() {
        let f = folder("Concentration (Valid:20240101 1200)", None);
        assert_eq!(TimestampStrategy::ValidStamp.resolve(&f), Some(1_704_110_400));
        assert_eq!(TimestampStrategy::TimeSpanBegin.resolve(&f), None);
    }

    #[test]
    fn test_time_span_takes_priority() {
        let f = folder(
            "Concentration (Valid:20240101 1200)",
            Some("2024-01-02T00:00:00Z"),
        );
        let resolved = TimestampResolver::default().resolve(&f, &clock());
        assert_eq!(resolved.t, 1_704_153_600);
        assert_eq!(resolved.strategy, Some(TimestampStrategy::TimeSpanBegin));
    }

    #[test]
    fn test_unparseable_begin_falls_through_to_name() {
        let f = folder("Concentration (Valid:20240101 1200)", Some("yesterday"));
        let resolved = TimestampResolver::default().resolve(&f, &clock());
        assert_eq!(resolved.t, 1_704_110_400);
        assert_eq!(resolved.strategy, Some(TimestampStrategy::ValidStamp));
    }

    #[test]
    fn test_clock_fallback() {
        let f = folder("Concentration", None);
        let resolved = TimestampResolver::default().resolve(&f, &clock());
        assert!(resolved.is_fallback());
        assert_eq!(resolved.t, clock().now().timestamp());
    }

    #[test]
    fn test_system_clock_fallback_is_valid_epoch() {
        let resolved = TimestampResolver::default().resolve(&folder("x", None), &SystemClock);
        assert!(resolved.is_fallback());
        assert!(resolved.t > 1_700_000_000);
    }
}
