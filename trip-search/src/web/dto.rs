//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Location;
use crate::criteria::CriteriaStore;
use crate::domain::{
    CalendarDate, Field, LocationRef, TripType, ValidationFailure, parse_iso_date,
};

/// Fields posted by the HTML search form.
///
/// Every field is optional text; parsing is lenient so a half-filled form
/// still reaches the validator and gets specific failure messages.
#[derive(Debug, Default, Deserialize)]
pub struct SearchFormRequest {
    #[serde(default)]
    pub from: String,

    #[serde(default)]
    pub to: String,

    /// Departure date (YYYY-MM-DD)
    #[serde(default)]
    pub dep: String,

    /// Return date (YYYY-MM-DD)
    #[serde(default)]
    pub ret: String,

    /// "Round trip?" checkbox; present only when ticked
    pub round_trip: Option<String>,

    /// Passenger count as typed
    pub pax: Option<String>,

    /// Which button submitted the form ("swap" or "search")
    pub action: Option<String>,
}

impl SearchFormRequest {
    pub fn is_round_trip(&self) -> bool {
        self.round_trip
            .as_deref()
            .is_some_and(|v| matches!(v, "on" | "true" | "1"))
    }

    pub fn wants_swap(&self) -> bool {
        self.action.as_deref() == Some("swap")
    }

    /// Load the posted values into a fresh store.
    ///
    /// Trip type is applied before the dates so that a one-way switch does
    /// not discard a return date posted alongside a round-trip checkbox.
    pub fn to_store(&self) -> CriteriaStore {
        let mut store = CriteriaStore::new();
        store.set_origin(LocationRef::parse(&self.from));
        store.set_destination(LocationRef::parse(&self.to));
        store.set_trip_type(TripType::from_round_trip(self.is_round_trip()));
        store.set_departure_date(parse_form_date("dep", &self.dep));
        store.set_return_date(parse_form_date("ret", &self.ret));
        store.set_passenger_count(parse_passenger_count(self.pax.as_deref()));
        store
    }
}

/// Parse a date input, treating blank or malformed text as empty.
pub fn parse_form_date(name: &str, raw: &str) -> Option<CalendarDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match parse_iso_date(raw) {
        Ok(date) => Some(date),
        Err(e) => {
            debug!(field = name, value = raw, error = %e, "ignoring unparsable date");
            None
        }
    }
}

/// Parse a passenger count input.
///
/// A missing field takes the form default of 1. Text that is not an
/// integer maps to 0 so the validator reports it as an invalid count.
pub fn parse_passenger_count(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else {
        return 1;
    };
    raw.trim().parse().unwrap_or_else(|_| {
        debug!(value = raw, "unparsable passenger count");
        0
    })
}

/// Request to validate criteria through the JSON API.
#[derive(Debug, Default, Deserialize)]
pub struct ValidateCriteriaRequest {
    /// Origin text or code
    pub origin: Option<String>,

    /// Destination text or code
    pub destination: Option<String>,

    /// Departure date (YYYY-MM-DD)
    pub departure_date: Option<String>,

    /// Return date (YYYY-MM-DD)
    pub return_date: Option<String>,

    #[serde(default)]
    pub round_trip: bool,

    /// Defaults to 1
    pub passengers: Option<i64>,
}

/// A malformed date in a JSON validation request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {field}: {value}")]
pub struct InvalidDateField {
    pub field: &'static str,
    pub value: String,
}

impl ValidateCriteriaRequest {
    /// Load the request into a fresh store.
    ///
    /// Unlike the HTML form, malformed dates are rejected outright.
    pub fn to_store(&self) -> Result<CriteriaStore, InvalidDateField> {
        let departure = parse_json_date("departure_date", self.departure_date.as_deref())?;
        let ret = parse_json_date("return_date", self.return_date.as_deref())?;

        let mut store = CriteriaStore::new();
        store.set_origin(self.origin.as_deref().and_then(LocationRef::parse));
        store.set_destination(self.destination.as_deref().and_then(LocationRef::parse));
        store.set_trip_type(TripType::from_round_trip(self.round_trip));
        store.set_departure_date(departure);
        store.set_return_date(ret);
        store.set_passenger_count(self.passengers.unwrap_or(1));
        Ok(store)
    }
}

fn parse_json_date(
    field: &'static str,
    raw: Option<&str>,
) -> Result<Option<CalendarDate>, InvalidDateField> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) => parse_iso_date(s).map(Some).map_err(|_| InvalidDateField {
            field,
            value: s.to_string(),
        }),
    }
}

/// Result of validating criteria.
#[derive(Debug, Serialize)]
pub struct ValidateCriteriaResponse {
    /// Whether the criteria are submittable
    pub ok: bool,

    /// Results view URI to navigate to, when `ok`
    pub uri: Option<String>,

    /// Serialized query string, when `ok`
    pub query: Option<String>,

    /// Reasons the criteria were rejected
    pub failures: Vec<FailureResult>,
}

/// A single validation failure.
#[derive(Debug, Serialize)]
pub struct FailureResult {
    /// Machine code (e.g., "duplicate_endpoint")
    pub code: &'static str,

    /// Field the failure is reported against
    pub field: Field,

    /// Human-readable message
    pub message: String,
}

impl FailureResult {
    pub fn from_failure(failure: &ValidationFailure) -> Self {
        Self {
            code: failure.code(),
            field: failure.field(),
            message: failure.to_string(),
        }
    }
}

/// Request to search the location catalog.
#[derive(Debug, Deserialize)]
pub struct LocationSearchRequest {
    /// Text typed so far
    #[serde(default)]
    pub q: String,

    /// Maximum number of results
    pub limit: Option<usize>,
}

/// A location in autocomplete results.
#[derive(Debug, Serialize)]
pub struct LocationResult {
    pub code: String,
    pub name: String,
    pub region: String,

    /// Option text to put in the form field
    pub label: String,
}

impl LocationResult {
    pub fn from_location(location: &Location) -> Self {
        Self {
            code: location.short_code.clone(),
            name: location.english_name.clone(),
            region: location.code_state.clone(),
            label: location.option_label(),
        }
    }
}

/// Autocomplete results.
#[derive(Debug, Serialize)]
pub struct LocationSearchResponse {
    pub locations: Vec<LocationResult>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
