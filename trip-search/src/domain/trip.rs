//! Trip type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether a search covers one journey or an outbound plus a return.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripType {
    #[default]
    OneWay,
    RoundTrip,
}

impl TripType {
    /// Map the form's "round trip?" checkbox to a trip type.
    pub fn from_round_trip(round_trip: bool) -> Self {
        if round_trip {
            TripType::RoundTrip
        } else {
            TripType::OneWay
        }
    }

    /// Returns true if a return date is required.
    pub fn is_round_trip(self) -> bool {
        self == TripType::RoundTrip
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TripType::OneWay => "one_way",
            TripType::RoundTrip => "round_trip",
        }
    }
}

impl fmt::Display for TripType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
