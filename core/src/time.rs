//! Time related utils.
//!
//! All formatting here is UTC. Credential scopes are date-stamped and the
//! server derives the same date on its side; formatting with the host's
//! local timezone would silently desync the two.

use chrono::prelude::*;

/// DateTime in UTC.
pub type DateTime = chrono::DateTime<Utc>;

/// Now time in UTC.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format a time into a scope date like `2019-02-25`.
pub fn format_date(t: DateTime) -> String {
    t.format("%Y-%m-%d").to_string()
}

/// Build a UTC time from a unix timestamp in seconds.
///
/// Returns `None` if the timestamp is out of chrono's representable range.
pub fn from_timestamp(secs: i64) -> Option<DateTime> {
    chrono::DateTime::from_timestamp(secs, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_is_utc() {
        let t = from_timestamp(1551113065).expect("timestamp must be valid");
        assert_eq!(format_date(t), "2019-02-25");
    }

    #[test]
    fn test_format_date_near_midnight() {
        // 2019-02-25T23:59:59Z: any non-UTC offset would flip the date.
        let t = from_timestamp(1551139199).expect("timestamp must be valid");
        assert_eq!(format_date(t), "2019-02-25");
        let t = from_timestamp(1551139200).expect("timestamp must be valid");
        assert_eq!(format_date(t), "2019-02-26");
    }
}
