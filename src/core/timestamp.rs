//! Timestamp formatting for log line prefixes
//!
//! The output template is fixed: ISO 8601 UTC with millisecond precision,
//! e.g. `2025-01-08T10:30:45.123Z`.

use chrono::{DateTime, Utc};

const ISO8601_MILLIS: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Format a datetime as ISO 8601 with milliseconds
#[must_use]
pub fn format_timestamp(datetime: &DateTime<Utc>) -> String {
    datetime.format(ISO8601_MILLIS).to_string()
}

/// Format the current instant as ISO 8601 with milliseconds
#[must_use]
pub fn now_timestamp() -> String {
    format_timestamp(&Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_datetime() -> DateTime<Utc> {
        // 2025-01-08 10:30:45.123456 UTC
        Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            + chrono::Duration::microseconds(123456)
    }

    #[test]
    fn test_iso8601_millis() {
        assert_eq!(format_timestamp(&fixed_datetime()), "2025-01-08T10:30:45.123Z");
    }

    #[test]
    fn test_now_has_expected_shape() {
        let now = now_timestamp();
        assert!(now.ends_with('Z'));
        assert!(now.contains('T'));
        // Date portion is `YYYY-MM-DD`
        assert_eq!(&now[4..5], "-");
        assert_eq!(&now[7..8], "-");
    }
}
