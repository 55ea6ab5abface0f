//! Askama templates for the web frontend.

use askama::Template;

use crate::catalog::LocationCatalog;
use crate::criteria::CriteriaStore;
use crate::domain::{Field, ValidationFailure, format_iso_date};
use crate::query::DisplayFields;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with the search form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub form: FormView,
    /// Earliest selectable date (YYYY-MM-DD)
    pub today: String,
    pub options: Vec<LocationOptionView>,
}

/// Results page.
#[derive(Template)]
#[template(path = "results.html")]
pub struct ResultsTemplate {
    pub results: ResultsView,
}

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Form field values and messages, ready for rendering.
///
/// Error strings are empty when a field has no error.
#[derive(Debug, Clone, Default)]
pub struct FormView {
    pub from: String,
    pub to: String,
    pub dep: String,
    pub ret: String,
    pub round_trip: bool,
    pub pax: String,

    /// Messages from a rejected submit, in check order
    pub failures: Vec<String>,

    pub from_error: String,
    pub to_error: String,
    pub dep_error: String,
    pub ret_error: String,
    pub pax_error: String,
}

impl FormView {
    /// Build a view from the store's values and field errors.
    pub fn from_store(store: &CriteriaStore, failures: &[ValidationFailure]) -> Self {
        let c = store.criteria();
        let error = |field: Field| {
            store
                .error_for(field)
                .map(ToString::to_string)
                .unwrap_or_default()
        };

        Self {
            from: c.origin.as_ref().map(|l| l.label()).unwrap_or_default(),
            to: c.destination.as_ref().map(|l| l.label()).unwrap_or_default(),
            dep: c.departure_date.map(format_iso_date).unwrap_or_default(),
            ret: c.return_date.map(format_iso_date).unwrap_or_default(),
            round_trip: c.trip_type.is_round_trip(),
            pax: c.passenger_count.to_string(),
            failures: failures.iter().map(ToString::to_string).collect(),
            from_error: error(Field::Origin),
            to_error: error(Field::Destination),
            dep_error: error(Field::DepartureDate),
            ret_error: error(Field::ReturnDate),
            pax_error: error(Field::PassengerCount),
        }
    }
}

/// An autocomplete option.
#[derive(Debug, Clone)]
pub struct LocationOptionView {
    pub label: String,
    pub region: String,
}

impl LocationOptionView {
    pub fn all(catalog: &LocationCatalog) -> Vec<Self> {
        catalog
            .iter()
            .map(|loc| Self {
                label: loc.option_label(),
                region: loc.code_state.clone(),
            })
            .collect()
    }
}

/// Results page values.
#[derive(Debug, Clone)]
pub struct ResultsView {
    pub from: String,
    pub to: String,
    pub departure: String,
    pub return_date: String,
    /// The return row appears only when the query supplied `ret`.
    pub show_return: bool,
    pub passengers: String,
}

impl ResultsView {
    pub fn from_fields(fields: &DisplayFields) -> Self {
        Self {
            from: fields.from.render().to_string(),
            to: fields.to.render().to_string(),
            departure: fields.departure.render().to_string(),
            return_date: fields.return_date.render().to_string(),
            show_return: fields.return_date.was_supplied(),
            passengers: fields.passengers.render().to_string(),
        }
    }
}
