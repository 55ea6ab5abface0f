//! Serialized query encoding.
//!
//! The query is the contract between the form and the results view:
//!
//! ```text
//! mode=bus&from=<text>&to=<text>&dep=<YYYY-MM-DD>&ret=<YYYY-MM-DD>&pax=<integer>
//! ```
//!
//! `ret` is present iff the trip is a round trip. No other keys are defined.

use url::form_urlencoded;

use crate::criteria::{DEFAULT_MODE, FormConfig, ValidatedCriteria};
use crate::domain::format_iso_date;

pub const KEY_MODE: &str = "mode";
pub const KEY_FROM: &str = "from";
pub const KEY_TO: &str = "to";
pub const KEY_DEPARTURE: &str = "dep";
pub const KEY_RETURN: &str = "ret";
pub const KEY_PASSENGERS: &str = "pax";

/// An ordered, flat mapping of string keys to string values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SerializedQuery {
    pairs: Vec<(String, String)>,
}

impl SerializedQuery {
    /// Build a query from key/value pairs, preserving order.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Parse an `application/x-www-form-urlencoded` query string.
    ///
    /// A leading `?` is ignored. Never fails: malformed escapes are decoded
    /// lossily.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self {
            pairs: form_urlencoded::parse(query.as_bytes())
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect(),
        }
    }

    /// Look up a key. When a key repeats, the first occurrence wins.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Render as a form-urlencoded query string (without a leading `?`).
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }

    fn push(&mut self, key: &str, value: String) {
        self.pairs.push((key.to_string(), value));
    }
}

/// Encode validated criteria with the default search mode.
pub fn encode(criteria: &ValidatedCriteria) -> SerializedQuery {
    encode_with_mode(criteria, DEFAULT_MODE)
}

/// Encode validated criteria under the given search mode.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use trip_search::criteria::{SearchCriteria, validate};
/// use trip_search::domain::LocationRef;
/// use trip_search::query::encode_with_mode;
///
/// let today = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
/// let criteria = SearchCriteria {
///     origin: LocationRef::parse("NYC"),
///     destination: LocationRef::parse("BOS"),
///     departure_date: Some(today),
///     passenger_count: 2,
///     ..SearchCriteria::default()
/// };
/// let validated = validate(&criteria, today).unwrap();
///
/// let query = encode_with_mode(&validated, "bus");
/// assert_eq!(
///     query.to_query_string(),
///     "mode=bus&from=NYC&to=BOS&dep=2025-05-01&pax=2"
/// );
/// ```
pub fn encode_with_mode(criteria: &ValidatedCriteria, mode: &str) -> SerializedQuery {
    let mut query = SerializedQuery::default();
    query.push(KEY_MODE, mode.to_string());
    query.push(KEY_FROM, criteria.origin().label());
    query.push(KEY_TO, criteria.destination().label());
    query.push(KEY_DEPARTURE, format_iso_date(criteria.departure_date()));
    if let Some(ret) = criteria.return_date() {
        query.push(KEY_RETURN, format_iso_date(ret));
    }
    query.push(KEY_PASSENGERS, criteria.passenger_count().to_string());
    query
}

/// Where a successful submit navigates to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTarget {
    pub path: String,
    pub query: SerializedQuery,
}

impl SubmitTarget {
    pub fn new(path: impl Into<String>, query: SerializedQuery) -> Self {
        Self {
            path: path.into(),
            query,
        }
    }

    /// The path and query joined into a relative URI.
    pub fn uri(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        format!("{}?{}", self.path, self.query.to_query_string())
    }
}

/// Build the navigation hand-off for validated criteria.
pub fn submit_target(criteria: &ValidatedCriteria, config: &FormConfig) -> SubmitTarget {
    SubmitTarget::new(
        config.results_path.clone(),
        encode_with_mode(criteria, &config.mode),
    )
}
