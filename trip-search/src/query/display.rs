//! Lenient decoding of a serialized query for the results view.
//!
//! The query arrives through a URI, so every key may be missing, empty or
//! malformed. Nothing here fails: each field resolves to a value to show or
//! to the [`UNAVAILABLE`] sentinel.

use std::fmt;

use crate::domain::{format_display_date, parse_iso_date};

use super::codec::{KEY_DEPARTURE, KEY_FROM, KEY_PASSENGERS, KEY_RETURN, KEY_TO, SerializedQuery};

/// Text shown in place of a missing or unreadable value.
pub const UNAVAILABLE: &str = "N/A";

/// A single display-ready field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayValue {
    /// Key present and readable; holds the text to show.
    Present(String),
    /// Key missing or empty.
    Absent,
    /// Key present but not readable; holds the raw value.
    Unparsable(String),
}

impl DisplayValue {
    /// The text to render: the value itself, or the sentinel.
    pub fn render(&self) -> &str {
        match self {
            DisplayValue::Present(text) => text,
            DisplayValue::Absent | DisplayValue::Unparsable(_) => UNAVAILABLE,
        }
    }

    /// True if the key was supplied at all, readable or not.
    pub fn was_supplied(&self) -> bool {
        !matches!(self, DisplayValue::Absent)
    }
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.render())
    }
}

/// Display values recovered from a serialized query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayFields {
    pub from: DisplayValue,
    pub to: DisplayValue,
    pub departure: DisplayValue,
    pub return_date: DisplayValue,
    pub passengers: DisplayValue,
}

/// Decode a serialized query into display fields.
///
/// # Examples
///
/// ```
/// use trip_search::query::{SerializedQuery, decode_for_display};
///
/// let fields = decode_for_display(&SerializedQuery::parse("from=NYC&dep=2025-05-10&pax=x"));
/// assert_eq!(fields.from.render(), "NYC");
/// assert_eq!(fields.departure.render(), "10/05/2025");
/// assert_eq!(fields.to.render(), "N/A");
/// assert_eq!(fields.passengers.render(), "N/A");
/// ```
pub fn decode_for_display(query: &SerializedQuery) -> DisplayFields {
    DisplayFields {
        from: decode_text(query.get(KEY_FROM)),
        to: decode_text(query.get(KEY_TO)),
        departure: decode_date(query.get(KEY_DEPARTURE)),
        return_date: decode_date(query.get(KEY_RETURN)),
        passengers: decode_count(query.get(KEY_PASSENGERS)),
    }
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.filter(|v| !v.trim().is_empty())
}

fn decode_text(raw: Option<&str>) -> DisplayValue {
    match non_empty(raw) {
        Some(text) => DisplayValue::Present(text.to_string()),
        None => DisplayValue::Absent,
    }
}

fn decode_date(raw: Option<&str>) -> DisplayValue {
    let Some(raw) = non_empty(raw) else {
        return DisplayValue::Absent;
    };
    match parse_iso_date(raw.trim()) {
        Ok(date) => DisplayValue::Present(format_display_date(date)),
        Err(_) => DisplayValue::Unparsable(raw.to_string()),
    }
}

fn decode_count(raw: Option<&str>) -> DisplayValue {
    let Some(raw) = non_empty(raw) else {
        return DisplayValue::Absent;
    };
    match raw.trim().parse::<u32>() {
        Ok(n) if n >= 1 => DisplayValue::Present(n.to_string()),
        _ => DisplayValue::Unparsable(raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(s: &str) -> DisplayFields {
        decode_for_display(&SerializedQuery::parse(s))
    }

    #[test]
    fn empty_query_all_unavailable() {
        let fields = decode("");
        for value in [
            &fields.from,
            &fields.to,
            &fields.departure,
            &fields.return_date,
            &fields.passengers,
        ] {
            assert_eq!(value, &DisplayValue::Absent);
            assert_eq!(value.render(), UNAVAILABLE);
        }
    }

    #[test]
    fn only_from_supplied() {
        let fields = decode("from=NYC");
        assert_eq!(fields.from.render(), "NYC");
        assert_eq!(fields.to.render(), "N/A");
        assert_eq!(fields.departure.render(), "N/A");
        assert_eq!(fields.return_date.render(), "N/A");
        assert_eq!(fields.passengers.render(), "N/A");
    }

    #[test]
    fn full_round_trip_query() {
        let fields = decode("mode=bus&from=NYC&to=BOS&dep=2025-05-10&ret=2025-05-12&pax=3");
        assert_eq!(fields.from, DisplayValue::Present("NYC".into()));
        assert_eq!(fields.to, DisplayValue::Present("BOS".into()));
        assert_eq!(fields.departure, DisplayValue::Present("10/05/2025".into()));
        assert_eq!(fields.return_date, DisplayValue::Present("12/05/2025".into()));
        assert_eq!(fields.passengers, DisplayValue::Present("3".into()));
    }

    #[test]
    fn absent_date_distinct_from_unparsable() {
        let absent = decode("from=NYC");
        assert_eq!(absent.departure, DisplayValue::Absent);
        assert!(!absent.departure.was_supplied());

        let bad = decode("dep=10%2F05%2F2025");
        assert_eq!(bad.departure, DisplayValue::Unparsable("10/05/2025".into()));
        assert!(bad.departure.was_supplied());
        assert_eq!(bad.departure.render(), UNAVAILABLE);
    }

    #[test]
    fn empty_values_are_absent() {
        let fields = decode("from=&to=+&dep=&pax=");
        assert_eq!(fields.from, DisplayValue::Absent);
        assert_eq!(fields.to, DisplayValue::Absent);
        assert_eq!(fields.departure, DisplayValue::Absent);
        assert_eq!(fields.passengers, DisplayValue::Absent);
    }

    #[test]
    fn bad_passenger_counts() {
        assert_eq!(decode("pax=0").passengers.render(), UNAVAILABLE);
        assert_eq!(decode("pax=-2").passengers.render(), UNAVAILABLE);
        assert_eq!(decode("pax=1.5").passengers.render(), UNAVAILABLE);
        assert_eq!(decode("pax=lots").passengers.render(), UNAVAILABLE);
        assert_eq!(decode("pax=99999999999").passengers.render(), UNAVAILABLE);
    }

    #[test]
    fn impossible_date_unparsable() {
        let fields = decode("dep=2025-02-30");
        assert_eq!(fields.departure, DisplayValue::Unparsable("2025-02-30".into()));
    }

    #[test]
    fn display_trait_matches_render() {
        assert_eq!(DisplayValue::Absent.to_string(), "N/A");
        assert_eq!(DisplayValue::Present("BOS".into()).to_string(), "BOS");
    }
}
