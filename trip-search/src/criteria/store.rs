//! Working search criteria and controlled mutations.
//!
//! The store never rejects a mutation. Cross-field rules belong to the
//! validator; the store only records which fields a mutation may have
//! invalidated so that [`CriteriaStore::revalidate`] can refresh their
//! errors.

use std::collections::{BTreeMap, BTreeSet};

use tracing::trace;

use crate::domain::{CalendarDate, Field, LocationRef, TripType, ValidationFailure};

use super::validate::check_field;

/// The form's current, possibly partial, field values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriteria {
    pub origin: Option<LocationRef>,
    pub destination: Option<LocationRef>,
    pub departure_date: Option<CalendarDate>,
    pub return_date: Option<CalendarDate>,
    /// Unclamped; range is checked at validation time.
    pub passenger_count: i64,
    pub trip_type: TripType,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            origin: None,
            destination: None,
            departure_date: None,
            return_date: None,
            passenger_count: 1,
            trip_type: TripType::OneWay,
        }
    }
}

/// Holds the working criteria and the per-field error state.
#[derive(Debug, Clone, Default)]
pub struct CriteriaStore {
    criteria: SearchCriteria,
    dirty: BTreeSet<Field>,
    errors: BTreeMap<Field, ValidationFailure>,
}

impl CriteriaStore {
    /// Create a store holding the default criteria.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with existing criteria.
    ///
    /// Every field starts dirty, so the first `revalidate` checks them all.
    pub fn with_criteria(criteria: SearchCriteria) -> Self {
        Self {
            criteria,
            dirty: Field::ALL.into_iter().collect(),
            errors: BTreeMap::new(),
        }
    }

    /// Read access to the working criteria.
    pub fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }

    /// An immutable copy of the working criteria.
    pub fn snapshot(&self) -> SearchCriteria {
        self.criteria.clone()
    }

    pub fn set_origin(&mut self, origin: Option<LocationRef>) {
        trace!(?origin, "set origin");
        self.criteria.origin = origin;
        self.mark(&[Field::Origin, Field::Destination]);
    }

    pub fn set_destination(&mut self, destination: Option<LocationRef>) {
        trace!(?destination, "set destination");
        self.criteria.destination = destination;
        self.mark(&[Field::Origin, Field::Destination]);
    }

    /// Exchange origin and destination in a single update.
    pub fn swap_endpoints(&mut self) {
        let criteria = &mut self.criteria;
        std::mem::swap(&mut criteria.origin, &mut criteria.destination);
        trace!(
            origin = ?criteria.origin,
            destination = ?criteria.destination,
            "swapped endpoints"
        );
        self.mark(&[Field::Origin, Field::Destination]);
    }

    pub fn set_departure_date(&mut self, date: Option<CalendarDate>) {
        trace!(?date, "set departure date");
        self.criteria.departure_date = date;
        self.mark(&[Field::DepartureDate, Field::ReturnDate]);
    }

    pub fn set_return_date(&mut self, date: Option<CalendarDate>) {
        trace!(?date, "set return date");
        self.criteria.return_date = date;
        self.mark(&[Field::ReturnDate, Field::DepartureDate]);
    }

    /// Change the trip type.
    ///
    /// Switching to one-way clears the return date in the same update.
    pub fn set_trip_type(&mut self, trip_type: TripType) {
        trace!(%trip_type, "set trip type");
        self.criteria.trip_type = trip_type;
        if trip_type == TripType::OneWay {
            self.criteria.return_date = None;
        }
        self.mark(&[Field::ReturnDate]);
    }

    pub fn set_passenger_count(&mut self, count: i64) {
        trace!(count, "set passenger count");
        self.criteria.passenger_count = count;
        self.mark(&[Field::PassengerCount]);
    }

    /// Fields whose errors may be stale since the last `revalidate`.
    pub fn pending_revalidation(&self) -> &BTreeSet<Field> {
        &self.dirty
    }

    /// Forget pending re-checks without running them.
    ///
    /// Used after loading submitted values, so that only fields touched by
    /// later mutations report errors.
    pub fn discard_pending(&mut self) {
        self.dirty.clear();
    }

    /// Re-run field checks for every dirty field and clear the dirty set.
    ///
    /// Returns the updated error map.
    pub fn revalidate(&mut self, today: CalendarDate) -> &BTreeMap<Field, ValidationFailure> {
        for field in std::mem::take(&mut self.dirty) {
            match check_field(field, &self.criteria, today) {
                Some(failure) => {
                    self.errors.insert(field, failure);
                }
                None => {
                    self.errors.remove(&field);
                }
            }
        }
        &self.errors
    }

    /// Current per-field errors, as of the last `revalidate`.
    pub fn errors(&self) -> &BTreeMap<Field, ValidationFailure> {
        &self.errors
    }

    pub fn error_for(&self, field: Field) -> Option<&ValidationFailure> {
        self.errors.get(&field)
    }

    fn mark(&mut self, fields: &[Field]) {
        self.dirty.extend(fields.iter().copied());
    }
}
