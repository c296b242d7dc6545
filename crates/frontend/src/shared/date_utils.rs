/// Utilities for date and time formatting
///
/// Dates are shown the way an en-US browser locale shows them. Timestamps
/// carrying an offset are converted to the local time zone; naive ones are
/// taken as local wall time. Anything unparseable is returned unchanged.
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

const DATE_FMT: &str = "%-m/%-d/%Y";
const DATETIME_FMT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

enum Parsed {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

fn parse(value: &str) -> Option<Parsed> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(Parsed::DateTime(dt.with_timezone(&Local).naive_local()));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(Parsed::DateTime(dt));
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .map(Parsed::Date)
}

/// Milliseconds since the Unix epoch, in local time.
pub fn from_timestamp_millis(millis: i64) -> Option<NaiveDateTime> {
    Local
        .timestamp_millis_opt(millis)
        .single()
        .map(|dt| dt.naive_local())
}

/// Example: "2024-03-15T14:02:26" -> "3/15/2024"
pub fn format_date(value: &str) -> String {
    match parse(value) {
        Some(Parsed::Date(d)) => d.format(DATE_FMT).to_string(),
        Some(Parsed::DateTime(dt)) => dt.format(DATE_FMT).to_string(),
        None => value.to_string(),
    }
}

/// Example: "2024-03-15T14:02:26" -> "3/15/2024, 2:02:26 PM"
pub fn format_datetime(value: &str) -> String {
    match parse(value) {
        Some(Parsed::Date(d)) => d
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.format(DATETIME_FMT).to_string())
            .unwrap_or_else(|| value.to_string()),
        Some(Parsed::DateTime(dt)) => dt.format(DATETIME_FMT).to_string(),
        None => value.to_string(),
    }
}

pub fn format_naive_date(dt: &NaiveDateTime) -> String {
    dt.format(DATE_FMT).to_string()
}

pub fn format_naive_datetime(dt: &NaiveDateTime) -> String {
    dt.format(DATETIME_FMT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "3/15/2024");
        assert_eq!(format_date("2024-12-01T08:00:00.123"), "12/1/2024");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26"), "3/15/2024, 2:02:26 PM");
        assert_eq!(format_datetime("2024-03-15 00:05:00"), "3/15/2024, 12:05:00 AM");
        assert_eq!(format_datetime("2024-03-15"), "3/15/2024, 12:00:00 AM");
    }

    #[test]
    fn test_offset_timestamps_are_parsed() {
        let formatted = format_datetime("2024-03-15T14:02:26.123Z");
        assert_ne!(formatted, "2024-03-15T14:02:26.123Z");
        assert!(formatted.contains("/2024, "));
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }
}
