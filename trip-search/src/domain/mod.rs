//! Domain types for the trip search form.
//!
//! This module contains the value types the form works with. Parsing
//! functions return typed errors, so code holding these values can trust
//! their shape; cross-field rules live in [`crate::criteria`].

mod date;
mod error;
mod location;
mod trip;

pub use date::{CalendarDate, DateError, format_display_date, format_iso_date, parse_iso_date};
pub use error::{Field, ValidationFailure, ValidationFailures};
pub use location::{LABEL_SEPARATOR, LocationRef};
pub use trip::TripType;
