//! Clock Seam
//!
//! Abstracts the system clock behind a trait so the mock generator can
//! be driven deterministically under test, and provides the ISO-8601
//! timestamp formatting the mock payload uses.

use chrono::{DateTime, SecondsFormat, Utc};

/// Source of the current instant
///
/// The generator takes its clock through this trait so tests can pin
/// time to a known instant.
pub trait Clock {
    /// The current instant in UTC
    fn now(&self) -> DateTime<Utc>;
}

/// System-backed clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a fixed instant, for tests
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}

/// Format an instant as ISO-8601 with millisecond precision and a
/// trailing `Z`, e.g. `2024-06-01T12:00:00.000Z`
pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_timestamp() {
        let instant = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        assert_eq!(format_timestamp(instant), "2024-06-01T12:00:00.000Z");
    }

    #[test]
    fn test_format_timestamp_millis() {
        let instant = Utc
            .timestamp_opt(1_702_366_498, 382_000_000)
            .single()
            .unwrap();
        assert_eq!(format_timestamp(instant), "2023-12-12T07:34:58.382Z");
    }

    #[test]
    fn test_fixed_clock() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 15, 8, 30, 0).unwrap();
        let clock = FixedClock::new(instant);
        assert_eq!(clock.now(), instant);
        assert_eq!(clock.now(), instant);
    }

    #[test]
    fn test_system_clock_is_current() {
        let clock = SystemClock;
        let drift = (Utc::now() - clock.now()).num_milliseconds().abs();
        assert!(drift < 1000, "system clock should track Utc::now");
    }
}
