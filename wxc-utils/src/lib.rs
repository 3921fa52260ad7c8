//! Shared utility functions for WXC crates.

/// Calendar-day helpers.
///
/// Every date that crosses a crate boundary is a zero-padded `YYYY-MM-DD`
/// string, so that plain string comparison orders days chronologically.
pub mod dates {
    use chrono::{Local, NaiveDate, NaiveDateTime, TimeDelta};

    /// Format of a calendar-day string.
    pub const DAY_FORMAT: &str = "%Y-%m-%d";

    /// Format of an hourly Open-Meteo timestamp ("2024-01-15T13:00").
    pub const HOURLY_FORMAT: &str = "%Y-%m-%dT%H:%M";

    /// Number of days the default range reaches back from today.
    pub const DEFAULT_RANGE_DAYS: i64 = 7;

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format(DAY_FORMAT).to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s, DAY_FORMAT)?)
    }

    /// Reduce an hourly timestamp to its calendar day.
    ///
    /// Accepts the minute-resolution form Open-Meteo returns as well as a
    /// bare "YYYY-MM-DD".
    pub fn calendar_day(timestamp: &str) -> anyhow::Result<String> {
        let trimmed = timestamp.trim();
        let date = match NaiveDateTime::parse_from_str(trimmed, HOURLY_FORMAT) {
            Ok(dt) => dt.date(),
            Err(_) => parse_date(trimmed)?,
        };
        Ok(format_date(&date))
    }

    /// The (start, end) pair the date inputs start with: a week ago through
    /// `today`.
    pub fn default_range_from(today: NaiveDate) -> (String, String) {
        let start = today - TimeDelta::days(DEFAULT_RANGE_DAYS);
        (format_date(&start), format_date(&today))
    }

    /// [`default_range_from`] anchored on the local clock.
    pub fn default_range() -> (String, String) {
        default_range_from(Local::now().date_naive())
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::NaiveDate;

        #[test]
        fn test_format_and_parse() {
            let date = NaiveDate::from_ymd_opt(2023, 6, 5).unwrap();
            let formatted = format_date(&date);
            assert_eq!(formatted, "2023-06-05");
            let parsed = parse_date(&formatted).unwrap();
            assert_eq!(parsed, date);
        }

        #[test]
        fn test_calendar_day_from_hourly_timestamp() {
            assert_eq!(calendar_day("2024-01-15T00:00").unwrap(), "2024-01-15");
            assert_eq!(calendar_day("2024-01-15T23:00").unwrap(), "2024-01-15");
            assert_eq!(calendar_day("2024-01-15").unwrap(), "2024-01-15");
        }

        #[test]
        fn test_calendar_day_rejects_garbage() {
            assert!(calendar_day("yesterday").is_err());
            assert!(calendar_day("2024-13-01T00:00").is_err());
        }

        #[test]
        fn test_default_range_spans_a_week() {
            let today = NaiveDate::from_ymd_opt(2024, 3, 3).unwrap();
            let (start, end) = default_range_from(today);
            assert_eq!(start, "2024-02-25");
            assert_eq!(end, "2024-03-03");
        }

        #[test]
        fn test_default_range_is_chronological() {
            let (start, end) = default_range();
            assert!(start < end);
        }
    }
}
