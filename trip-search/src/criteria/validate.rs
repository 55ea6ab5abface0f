//! Criteria validation.
//!
//! Checks run in a fixed order and stop at the first category that fails:
//!
//! 1. origin and destination present
//! 2. origin and destination distinct
//! 3. departure date present
//! 4. departure date not in the past
//! 5. return date present and not before departure (round trips only)
//! 6. passenger count at least one
//!
//! Each check is exposed on its own so it can be exercised in isolation.

use tracing::debug;

use crate::domain::{
    CalendarDate, Field, LocationRef, TripType, ValidationFailure, ValidationFailures,
};

use super::store::SearchCriteria;

/// Submittable criteria.
///
/// Only [`validate`] constructs this type, so holding one proves every
/// cross-field rule held at validation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedCriteria {
    origin: LocationRef,
    destination: LocationRef,
    departure_date: CalendarDate,
    /// Present iff the trip is a round trip.
    return_date: Option<CalendarDate>,
    passenger_count: u32,
}

impl ValidatedCriteria {
    pub fn origin(&self) -> &LocationRef {
        &self.origin
    }

    pub fn destination(&self) -> &LocationRef {
        &self.destination
    }

    pub fn departure_date(&self) -> CalendarDate {
        self.departure_date
    }

    pub fn return_date(&self) -> Option<CalendarDate> {
        self.return_date
    }

    pub fn passenger_count(&self) -> u32 {
        self.passenger_count
    }

    pub fn trip_type(&self) -> TripType {
        TripType::from_round_trip(self.return_date.is_some())
    }
}

/// Validate a criteria snapshot.
///
/// `today` is the day validation happens on; a departure on `today` is
/// accepted. On success the return date is dropped for one-way trips,
/// even if the snapshot still carries one.
pub fn validate(
    criteria: &SearchCriteria,
    today: CalendarDate,
) -> Result<ValidatedCriteria, ValidationFailures> {
    let result = run_checks(criteria, today);
    if let Err(failures) = &result {
        debug!(%failures, "criteria rejected");
    }
    result
}

fn run_checks(
    criteria: &SearchCriteria,
    today: CalendarDate,
) -> Result<ValidatedCriteria, ValidationFailures> {
    let (origin, destination) = check_endpoints_present(criteria)?;
    check_distinct_endpoints(origin, destination)?;
    let departure_date = check_departure_present(criteria)?;
    check_departure_not_past(departure_date, today)?;
    let return_date = check_return(criteria.trip_type, departure_date, criteria.return_date)?;
    let passenger_count = check_passenger_count(criteria.passenger_count)?;

    Ok(ValidatedCriteria {
        origin: origin.clone(),
        destination: destination.clone(),
        departure_date,
        return_date,
        passenger_count,
    })
}

/// A location with a blank code names no place.
fn present(location: &Option<LocationRef>) -> Option<&LocationRef> {
    location.as_ref().filter(|l| !l.is_blank())
}

/// Both endpoints must be set; reports every missing one.
pub fn check_endpoints_present(
    criteria: &SearchCriteria,
) -> Result<(&LocationRef, &LocationRef), ValidationFailures> {
    match (present(&criteria.origin), present(&criteria.destination)) {
        (Some(origin), Some(destination)) => Ok((origin, destination)),
        (origin, destination) => {
            let mut missing = Vec::new();
            if origin.is_none() {
                missing.push(ValidationFailure::MissingField(Field::Origin));
            }
            if destination.is_none() {
                missing.push(ValidationFailure::MissingField(Field::Destination));
            }
            Err(ValidationFailures::from_vec(missing)
                .unwrap_or_else(|| ValidationFailure::MissingField(Field::Origin).into()))
        }
    }
}

/// Origin and destination must not name the same place.
pub fn check_distinct_endpoints(
    origin: &LocationRef,
    destination: &LocationRef,
) -> Result<(), ValidationFailure> {
    if origin.same_place(destination) {
        return Err(ValidationFailure::DuplicateEndpoint);
    }
    Ok(())
}

pub fn check_departure_present(criteria: &SearchCriteria) -> Result<CalendarDate, ValidationFailure> {
    criteria
        .departure_date
        .ok_or(ValidationFailure::MissingField(Field::DepartureDate))
}

/// Departure must be today or later.
pub fn check_departure_not_past(
    departure: CalendarDate,
    today: CalendarDate,
) -> Result<(), ValidationFailure> {
    if departure < today {
        return Err(ValidationFailure::PastDate(Field::DepartureDate));
    }
    Ok(())
}

/// Resolve the return date to submit.
///
/// One-way trips always resolve to `None`. Round trips need a return date
/// on or after the departure date.
pub fn check_return(
    trip_type: TripType,
    departure: CalendarDate,
    return_date: Option<CalendarDate>,
) -> Result<Option<CalendarDate>, ValidationFailure> {
    match trip_type {
        TripType::OneWay => Ok(None),
        TripType::RoundTrip => {
            let ret = return_date.ok_or(ValidationFailure::MissingField(Field::ReturnDate))?;
            if ret < departure {
                return Err(ValidationFailure::InvalidDateOrder);
            }
            Ok(Some(ret))
        }
    }
}

pub fn check_passenger_count(count: i64) -> Result<u32, ValidationFailure> {
    match u32::try_from(count) {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(ValidationFailure::InvalidPassengerCount),
    }
}

/// The first failure attributable to a single field.
///
/// Used for per-field error display: unlike [`validate`], a field is checked
/// even when earlier fields are incomplete.
pub fn check_field(
    field: Field,
    criteria: &SearchCriteria,
    today: CalendarDate,
) -> Option<ValidationFailure> {
    match field {
        Field::Origin | Field::Destination => {
            let (this, other) = if field == Field::Origin {
                (present(&criteria.origin), present(&criteria.destination))
            } else {
                (present(&criteria.destination), present(&criteria.origin))
            };
            match (this, other) {
                (None, _) => Some(ValidationFailure::MissingField(field)),
                (Some(this), Some(other)) => check_distinct_endpoints(this, other).err(),
                (Some(_), None) => None,
            }
        }
        Field::DepartureDate => check_departure_present(criteria)
            .and_then(|dep| check_departure_not_past(dep, today))
            .err(),
        Field::ReturnDate => match (criteria.trip_type, criteria.departure_date) {
            (TripType::OneWay, _) => None,
            (TripType::RoundTrip, Some(dep)) => {
                check_return(TripType::RoundTrip, dep, criteria.return_date).err()
            }
            (TripType::RoundTrip, None) => criteria
                .return_date
                .is_none()
                .then_some(ValidationFailure::MissingField(Field::ReturnDate)),
        },
        Field::PassengerCount => check_passenger_count(criteria.passenger_count).err(),
    }
}
