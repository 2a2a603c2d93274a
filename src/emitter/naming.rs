//! Object naming for emitted batches
//!
//! `/<UTC date YYYY-MM-DD>/<first>-<last>.txt`. Two objects collide only if
//! batches emitted on the same UTC day share both endpoint positions.

use chrono::{DateTime, NaiveDate, Utc};

/// `chrono` format of the date segment
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Extension of every emitted object
pub const OBJECT_EXTENSION: &str = "txt";

/// Object name for a batch emitted now
pub fn derive_object_name(first: &str, last: &str) -> String {
    object_name_at(Utc::now(), first, last)
}

/// Object name for a batch emitted at `now`
pub fn object_name_at(now: DateTime<Utc>, first: &str, last: &str) -> String {
    object_name_for_date(now.date_naive(), first, last)
}

pub fn object_name_for_date(date: NaiveDate, first: &str, last: &str) -> String {
    format!(
        "/{}/{}-{}.{}",
        date.format(DATE_FORMAT),
        first,
        last,
        OBJECT_EXTENSION
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_name_for_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
        assert_eq!(object_name_for_date(date, "100", "205"), "/2024-03-11/100-205.txt");
    }

    #[test]
    fn test_name_uses_utc_day() {
        let now = Utc.with_ymd_and_hms(2024, 3, 11, 23, 59, 59).unwrap();
        assert_eq!(object_name_at(now, "100", "205"), "/2024-03-11/100-205.txt");
    }

    #[test]
    fn test_single_digit_months_are_padded() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        assert_eq!(object_name_for_date(date, "1", "1"), "/2025-01-02/1-1.txt");
    }

    #[test]
    fn test_derive_uses_todays_date() {
        let before = object_name_at(Utc::now(), "7", "9");
        let name = derive_object_name("7", "9");
        let after = object_name_at(Utc::now(), "7", "9");
        // Either side of a midnight rollover
        assert!(name == before || name == after);
    }
}
