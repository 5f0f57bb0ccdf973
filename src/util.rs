// Formatting and small string helpers shared by the console views

use chrono::{Local, TimeZone};

/// `YYYY-MM-DD HH:MM:SS` in the host's local timezone.
pub fn format_full(timestamp: i64) -> String {
    format_full_in(timestamp, &Local)
}

/// `MM-DD HH:00` in the host's local timezone, for hourly aggregated series.
pub fn format_hour_bucket(timestamp: i64) -> String {
    format_hour_bucket_in(timestamp, &Local)
}

pub fn format_full_in<Tz: TimeZone>(timestamp: i64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match tz.timestamp_opt(timestamp, 0).single() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => String::new(),
    }
}

pub fn format_hour_bucket_in<Tz: TimeZone>(timestamp: i64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match tz.timestamp_opt(timestamp, 0).single() {
        Some(dt) => dt.format("%m-%d %H:00").to_string(),
        None => String::new(),
    }
}

/// Whether `raw` parses as any JSON value. No schema is checked.
pub fn verify_json(raw: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(raw).is_ok()
}

pub fn remove_trailing_slash(url: &str) -> &str {
    url.strip_suffix('/').unwrap_or(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    // 2024-03-05 09:07:03 UTC
    const MARCH_5: i64 = 1_709_629_623;

    #[test]
    fn epoch_in_utc() {
        assert_eq!(format_full_in(0, &Utc), "1970-01-01 00:00:00");
        assert_eq!(format_hour_bucket_in(0, &Utc), "01-01 00:00");
    }

    #[test]
    fn single_digit_components_are_padded() {
        assert_eq!(format_full_in(MARCH_5, &Utc), "2024-03-05 09:07:03");
        assert_eq!(format_hour_bucket_in(MARCH_5, &Utc), "03-05 09:00");
    }

    #[test]
    fn offset_zone_shifts_calendar() {
        let east8 = FixedOffset::east_opt(8 * 3600).unwrap();
        assert_eq!(format_full_in(MARCH_5, &east8), "2024-03-05 17:07:03");
        let west10 = FixedOffset::west_opt(10 * 3600).unwrap();
        assert_eq!(format_hour_bucket_in(MARCH_5, &west10), "03-04 23:00");
    }

    #[test]
    fn negative_timestamp_goes_before_epoch() {
        assert_eq!(format_full_in(-1, &Utc), "1969-12-31 23:59:59");
    }

    #[test]
    fn unrepresentable_timestamp_is_empty() {
        assert_eq!(format_full_in(i64::MAX, &Utc), "");
        assert_eq!(format_hour_bucket_in(i64::MIN, &Utc), "");
    }

    #[test]
    fn json_validity() {
        assert!(verify_json(r#"{"a":1}"#));
        assert!(verify_json("[1, 2, 3]"));
        assert!(verify_json("42"));
        assert!(!verify_json("{a:1}"));
        assert!(!verify_json(""));
    }

    #[test]
    fn trailing_slash_stripped_once() {
        assert_eq!(remove_trailing_slash("https://api.example.com/"), "https://api.example.com");
        assert_eq!(remove_trailing_slash("https://api.example.com"), "https://api.example.com");
        assert_eq!(remove_trailing_slash("/a//"), "/a/");
    }
}
