use chrono::{DateTime, Utc};

/// strftime pattern used for every timestamp shown to users
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

/// Placeholder rendered when a timestamp is absent
pub const MISSING_TIMESTAMP: &str = "—";

/// Source of the current time for ticket creation and resolution
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time in UTC
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Render an optional timestamp as `YYYY-MM-DD HH:MM UTC`, or `—` when absent
pub fn format_timestamp(timestamp: Option<DateTime<Utc>>) -> String {
    timestamp.map_or_else(
        || MISSING_TIMESTAMP.to_string(),
        |ts| ts.format(TIMESTAMP_FORMAT).to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_timestamp() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(format_timestamp(Some(ts)), "2024-01-01 12:00 UTC");
    }

    #[test]
    fn test_format_timestamp_drops_seconds() {
        let ts = Utc.with_ymd_and_hms(2023, 11, 5, 9, 7, 59).unwrap();
        assert_eq!(format_timestamp(Some(ts)), "2023-11-05 09:07 UTC");
    }

    #[test]
    fn test_format_missing_timestamp() {
        assert_eq!(format_timestamp(None), "—");
    }

    #[test]
    fn test_system_clock_is_current() {
        let before = Utc::now();
        let now = SystemClock.now();
        assert!(now >= before);
    }
}
