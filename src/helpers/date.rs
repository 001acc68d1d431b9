//! Date helper functions

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

/// Parse a publication date as written in post files
///
/// Accepts RFC 3339, `YYYY-MM-DDTHH:MM:SS[.fff]`, `YYYY-MM-DD HH:MM:SS`
/// and bare `YYYY-MM-DD` (midnight).
///
/// # Examples
/// ```ignore
/// parse_published_at("2025-01-15") // -> Some(2025-01-15T00:00:00)
/// ```
pub fn parse_published_at(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }

    for format in [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Calendar date of a publication date as the author wrote it.
///
/// Unlike [`parse_published_at`], an RFC 3339 offset is not applied, so
/// `2025-01-15T01:00:00+05:00` stays on the 15th.
pub fn parse_published_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    match DateTime::parse_from_rfc3339(value) {
        Ok(dt) => Some(dt.date_naive()),
        Err(_) => parse_published_at(value).map(|dt| dt.date()),
    }
}

/// Format a date for a sitemap `<lastmod>` element
pub fn date_w3c(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Server-side creation timestamp, e.g. `2025-03-01T10:15:30.123Z`
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Today's date as used for new posts
pub fn today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_date() {
        let dt = parse_published_at("2025-01-15").unwrap();
        assert_eq!(dt.format("%Y-%m-%d %H:%M:%S").to_string(), "2025-01-15 00:00:00");
    }

    #[test]
    fn test_parse_datetime_variants() {
        let a = parse_published_at("2025-01-15 10:30:00").unwrap();
        let b = parse_published_at("2025-01-15T10:30:00").unwrap();
        let c = parse_published_at("2025-01-15T12:30:00+02:00").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_published_at("").is_none());
        assert!(parse_published_at("yesterday").is_none());
        assert!(parse_published_at("2025-13-40").is_none());
    }

    #[test]
    fn test_date_w3c() {
        let date = parse_published_date("2025-03-01 08:00:00").unwrap();
        assert_eq!(date_w3c(&date), "2025-03-01");
    }

    #[test]
    fn test_published_date_keeps_authored_day() {
        let value = "2025-01-15T01:00:00+05:00";
        let utc = parse_published_at(value).unwrap();
        assert_eq!(utc.format("%Y-%m-%d %H:%M").to_string(), "2025-01-14 20:00");

        let date = parse_published_date(value).unwrap();
        assert_eq!(date_w3c(&date), "2025-01-15");
        assert_eq!(
            date_w3c(&parse_published_date("2025-01-15T23:30:00-08:00").unwrap()),
            "2025-01-15"
        );
        assert!(parse_published_date("someday").is_none());
    }

    #[test]
    fn test_timestamp_now_is_rfc3339() {
        let ts = timestamp_now();
        assert!(ts.ends_with('Z'));
        assert!(DateTime::parse_from_rfc3339(&ts).is_ok());
    }
}
