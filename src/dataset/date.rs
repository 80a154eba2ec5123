//! Lenient publish date parsing.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d %B %Y", "%B %d, %Y"];

/// Parse a publish date, returning `None` for empty or unrecognized input.
///
/// Timestamps keep only their calendar date. A timestamp with an offset
/// keeps the date as written at that offset.
pub fn parse_publish_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.date_naive());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|timestamp| timestamp.date())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_parse_known_formats() {
        assert_eq!(parse_publish_date("2024-01-15"), date(2024, 1, 15));
        assert_eq!(parse_publish_date("2024/01/15"), date(2024, 1, 15));
        assert_eq!(parse_publish_date("01/15/2024"), date(2024, 1, 15));
        assert_eq!(parse_publish_date("2024-01-15 08:30:00"), date(2024, 1, 15));
        assert_eq!(parse_publish_date("2024-01-15T08:30:00"), date(2024, 1, 15));
        assert_eq!(parse_publish_date("2024-01-15T23:30:00+07:00"), date(2024, 1, 15));
        assert_eq!(parse_publish_date("2024-01-15T08:30:00Z"), date(2024, 1, 15));
        assert_eq!(parse_publish_date(" 15 January 2024 "), date(2024, 1, 15));
    }

    #[test]
    fn test_unparseable_is_absent() {
        assert_eq!(parse_publish_date(""), None);
        assert_eq!(parse_publish_date("   "), None);
        assert_eq!(parse_publish_date("a month ago"), None);
        assert_eq!(parse_publish_date("2024-13-45"), None);
    }
}
