//! Search criteria state and validation.
//!
//! [`CriteriaStore`] holds the form's working values and applies mutations;
//! [`validate`] turns a snapshot into [`ValidatedCriteria`] or a list of
//! failures. The validator never mutates the store, so a rejected submit
//! leaves the form exactly as the user left it.

mod config;
mod store;
mod validate;

pub use config::{DEFAULT_MODE, DEFAULT_RESULTS_PATH, FormConfig};
pub use store::{CriteriaStore, SearchCriteria};
pub use validate::{
    ValidatedCriteria, check_departure_not_past, check_departure_present,
    check_distinct_endpoints, check_endpoints_present, check_field, check_passenger_count,
    check_return, validate,
};
