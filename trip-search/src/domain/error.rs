//! Validation failure types.
//!
//! These represent reasons a search cannot be submitted. They are local to
//! the form: none of them is fatal, and the form stays usable after any of
//! them.

use std::fmt;

use serde::Serialize;

/// A field of the search form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Origin,
    Destination,
    DepartureDate,
    ReturnDate,
    PassengerCount,
}

impl Field {
    /// Every field, in form order.
    pub const ALL: [Field; 5] = [
        Field::Origin,
        Field::Destination,
        Field::DepartureDate,
        Field::ReturnDate,
        Field::PassengerCount,
    ];

    /// Human-readable label, as shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::Origin => "From",
            Field::Destination => "To",
            Field::DepartureDate => "Departure date",
            Field::ReturnDate => "Return date",
            Field::PassengerCount => "No. of passengers",
        }
    }

    /// Stable machine name.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Origin => "origin",
            Field::Destination => "destination",
            Field::DepartureDate => "departure_date",
            Field::ReturnDate => "return_date",
            Field::PassengerCount => "passenger_count",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single reason the criteria are not submittable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationFailure {
    /// A required field is empty
    #[error("{0} is required")]
    MissingField(Field),

    /// Origin and destination name the same place
    #[error("From and To must be different")]
    DuplicateEndpoint,

    /// A date lies before today
    #[error("{0} cannot be in the past")]
    PastDate(Field),

    /// Return date lies before departure date
    #[error("Return date must be same or after departure date")]
    InvalidDateOrder,

    /// Passenger count is below one or out of range
    #[error("Passengers must be at least 1")]
    InvalidPassengerCount,
}

impl ValidationFailure {
    /// Stable machine code for API responses.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationFailure::MissingField(_) => "missing_field",
            ValidationFailure::DuplicateEndpoint => "duplicate_endpoint",
            ValidationFailure::PastDate(_) => "past_date",
            ValidationFailure::InvalidDateOrder => "invalid_date_order",
            ValidationFailure::InvalidPassengerCount => "invalid_passenger_count",
        }
    }

    /// The field the failure is reported against.
    ///
    /// Cross-field failures are attributed to the field a user would fix.
    pub fn field(&self) -> Field {
        match *self {
            ValidationFailure::MissingField(field) | ValidationFailure::PastDate(field) => field,
            ValidationFailure::DuplicateEndpoint => Field::Destination,
            ValidationFailure::InvalidDateOrder => Field::ReturnDate,
            ValidationFailure::InvalidPassengerCount => Field::PassengerCount,
        }
    }
}

/// A non-empty list of validation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", join_messages(.0))]
pub struct ValidationFailures(Vec<ValidationFailure>);

impl ValidationFailures {
    /// Wrap a single failure.
    pub fn single(failure: ValidationFailure) -> Self {
        Self(vec![failure])
    }

    /// Wrap a list of failures; returns `None` if the list is empty.
    pub fn from_vec(failures: Vec<ValidationFailure>) -> Option<Self> {
        (!failures.is_empty()).then_some(Self(failures))
    }

    pub fn as_slice(&self) -> &[ValidationFailure] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationFailure> {
        self.0.iter()
    }
}

impl From<ValidationFailure> for ValidationFailures {
    fn from(failure: ValidationFailure) -> Self {
        Self::single(failure)
    }
}

impl<'a> IntoIterator for &'a ValidationFailures {
    type Item = &'a ValidationFailure;
    type IntoIter = std::slice::Iter<'a, ValidationFailure>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

fn join_messages(failures: &[ValidationFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationFailure::MissingField(Field::Origin);
        assert_eq!(err.to_string(), "From is required");

        let err = ValidationFailure::MissingField(Field::ReturnDate);
        assert_eq!(err.to_string(), "Return date is required");

        let err = ValidationFailure::DuplicateEndpoint;
        assert_eq!(err.to_string(), "From and To must be different");

        let err = ValidationFailure::PastDate(Field::DepartureDate);
        assert_eq!(err.to_string(), "Departure date cannot be in the past");

        let err = ValidationFailure::InvalidDateOrder;
        assert_eq!(
            err.to_string(),
            "Return date must be same or after departure date"
        );

        let err = ValidationFailure::InvalidPassengerCount;
        assert_eq!(err.to_string(), "Passengers must be at least 1");
    }

    #[test]
    fn failures_display_joins() {
        let failures = ValidationFailures::from_vec(vec![
            ValidationFailure::MissingField(Field::Origin),
            ValidationFailure::MissingField(Field::Destination),
        ])
        .unwrap();
        assert_eq!(failures.to_string(), "From is required; To is required");
        assert_eq!(failures.len(), 2);
    }

    #[test]
    fn empty_list_rejected() {
        assert!(ValidationFailures::from_vec(Vec::new()).is_none());
    }

    #[test]
    fn failure_fields() {
        assert_eq!(ValidationFailure::DuplicateEndpoint.field(), Field::Destination);
        assert_eq!(ValidationFailure::InvalidDateOrder.field(), Field::ReturnDate);
        assert_eq!(
            ValidationFailure::PastDate(Field::DepartureDate).field(),
            Field::DepartureDate
        );
    }

    #[test]
    fn codes_are_distinct() {
        use std::collections::HashSet;
        let codes: HashSet<_> = [
            ValidationFailure::MissingField(Field::Origin),
            ValidationFailure::DuplicateEndpoint,
            ValidationFailure::PastDate(Field::DepartureDate),
            ValidationFailure::InvalidDateOrder,
            ValidationFailure::InvalidPassengerCount,
        ]
        .iter()
        .map(|f| f.code())
        .collect();
        assert_eq!(codes.len(), 5);
    }
}
