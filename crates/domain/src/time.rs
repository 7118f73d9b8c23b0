//! Time and timestamp helpers.

use chrono::{DateTime, Datelike, Utc};

/// UTC timestamp used for gig dates, publication dates, and sitemap entries.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Calendar year of a timestamp, used for the archive year facets.
#[must_use]
pub fn year_of(ts: Timestamp) -> i32 {
    ts.year()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn should_return_current_utc_time() {
        let before = Utc::now();
        let ts = now();
        let after = Utc::now();
        assert!(ts >= before);
        assert!(ts <= after);
    }

    #[test]
    fn should_extract_calendar_year() {
        let ts = Utc
            .with_ymd_and_hms(2024, 6, 6, 20, 0, 0)
            .single()
            .unwrap();
        assert_eq!(year_of(ts), 2024);
    }
}
