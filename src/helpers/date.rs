//! Date helper functions

use chrono::{DateTime, TimeZone, Utc};

/// Format a date in full format (like "January 25, 2025")
pub fn full_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%B %-d, %Y").to_string()
}

/// Format a date in ISO 8601 / XML format
pub fn date_xml<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%Y-%m-%dT%H:%M:%S%:z").to_string()
}

/// Format a publication date relative to `now`, the way post cards show it
///
/// Day counts round up, so anything under 24 hours reads "Yesterday".
/// Dates a month or more away fall back to [`full_date`].
pub fn format_blog_date(date: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let millis = now.signed_duration_since(*date).num_milliseconds().unsigned_abs();
    let days = millis.div_ceil(86_400_000);

    if days <= 1 {
        "Yesterday".to_string()
    } else if days < 7 {
        format!("{} days ago", days)
    } else if days < 30 {
        let weeks = days / 7;
        if weeks == 1 {
            "1 week ago".to_string()
        } else {
            format!("{} weeks ago", weeks)
        }
    } else {
        full_date(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 2, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_full_date() {
        let date = Utc.with_ymd_and_hms(2025, 1, 5, 10, 0, 0).unwrap();
        assert_eq!(full_date(&date), "January 5, 2025");
    }

    #[test]
    fn test_date_xml() {
        let date = Utc.with_ymd_and_hms(2025, 1, 25, 10, 0, 0).unwrap();
        assert_eq!(date_xml(&date), "2025-01-25T10:00:00+00:00");
    }

    #[test]
    fn test_format_blog_date_recent() {
        let now = now();
        assert_eq!(format_blog_date(&(now - Duration::hours(5)), &now), "Yesterday");
        assert_eq!(format_blog_date(&(now - Duration::days(3)), &now), "3 days ago");
        assert_eq!(format_blog_date(&(now - Duration::days(8)), &now), "1 week ago");
        assert_eq!(format_blog_date(&(now - Duration::days(20)), &now), "2 weeks ago");
    }

    #[test]
    fn test_format_blog_date_old() {
        let now = now();
        let date = Utc.with_ymd_and_hms(2024, 11, 3, 9, 0, 0).unwrap();
        assert_eq!(format_blog_date(&date, &now), "November 3, 2024");
    }
}
