//! Calendar date handling.
//!
//! Travel dates carry no time of day. The form and the serialized query use
//! ISO `YYYY-MM-DD`; the results view shows `DD/MM/YYYY`.

use chrono::NaiveDate;

/// A date with no time-of-day component.
pub type CalendarDate = NaiveDate;

/// Error returned when parsing an invalid date string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid date: {reason}")]
pub struct DateError {
    reason: &'static str,
}

impl DateError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// Parse an ISO calendar date (`YYYY-MM-DD`).
///
/// # Examples
///
/// ```
/// use trip_search::domain::parse_iso_date;
///
/// let date = parse_iso_date("2025-05-10").unwrap();
/// assert_eq!(date.to_string(), "2025-05-10");
///
/// assert!(parse_iso_date("2025-5-10").is_err());
/// assert!(parse_iso_date("2025-02-30").is_err());
/// assert!(parse_iso_date("10/05/2025").is_err());
/// ```
pub fn parse_iso_date(s: &str) -> Result<CalendarDate, DateError> {
    let bytes = s.as_bytes();

    // Must be exactly 10 characters: YYYY-MM-DD
    if bytes.len() != 10 {
        return Err(DateError::new("expected YYYY-MM-DD format"));
    }

    if bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(DateError::new("expected dashes at positions 4 and 7"));
    }

    let year = parse_digits(&bytes[0..4]).ok_or_else(|| DateError::new("invalid year digits"))?;
    let month =
        parse_digits(&bytes[5..7]).ok_or_else(|| DateError::new("invalid month digits"))?;
    let day = parse_digits(&bytes[8..10]).ok_or_else(|| DateError::new("invalid day digits"))?;

    NaiveDate::from_ymd_opt(year as i32, month, day)
        .ok_or_else(|| DateError::new("no such calendar day"))
}

/// Format a date as ISO `YYYY-MM-DD`.
pub fn format_iso_date(date: CalendarDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Format a date for display as `DD/MM/YYYY`.
pub fn format_display_date(date: CalendarDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

fn parse_digits(bytes: &[u8]) -> Option<u32> {
    bytes.iter().try_fold(0u32, |acc, &b| {
        b.is_ascii_digit().then(|| acc * 10 + u32::from(b - b'0'))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parse_valid() {
        assert_eq!(parse_iso_date("2025-05-10").unwrap(), date(2025, 5, 10));
        assert_eq!(parse_iso_date("2024-02-29").unwrap(), date(2024, 2, 29));
        assert_eq!(parse_iso_date("0001-01-01").unwrap(), date(1, 1, 1));
    }

    #[test]
    fn reject_wrong_shape() {
        assert!(parse_iso_date("").is_err());
        assert!(parse_iso_date("2025-5-10").is_err());
        assert!(parse_iso_date("2025/05/10").is_err());
        assert!(parse_iso_date("2025-05-10T00:00").is_err());
        assert!(parse_iso_date("+025-05-10").is_err());
        assert!(parse_iso_date("2025-0a-10").is_err());
    }

    #[test]
    fn reject_impossible_days() {
        assert!(parse_iso_date("2025-02-29").is_err());
        assert!(parse_iso_date("2025-13-01").is_err());
        assert!(parse_iso_date("2025-00-10").is_err());
        assert!(parse_iso_date("2025-04-31").is_err());
    }

    #[test]
    fn error_display() {
        let err = parse_iso_date("nope").unwrap_err();
        assert_eq!(err.to_string(), "invalid date: expected YYYY-MM-DD format");
    }

    #[test]
    fn formats() {
        let d = date(2025, 5, 3);
        assert_eq!(format_iso_date(d), "2025-05-03");
        assert_eq!(format_display_date(d), "03/05/2025");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Formatting then parsing returns the same day
        #[test]
        fn iso_roundtrip(days in 0i64..200_000) {
            let d = NaiveDate::from_ymd_opt(1600, 1, 1).unwrap() + chrono::Duration::days(days);
            prop_assert_eq!(parse_iso_date(&format_iso_date(d)).unwrap(), d);
        }

        /// Arbitrary input never panics
        #[test]
        fn parse_never_panics(s in "\\PC{0,16}") {
            let _ = parse_iso_date(&s);
        }
    }
}
