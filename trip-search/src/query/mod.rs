//! Query encoding for the form/results hand-off.
//!
//! Encoding is strict and only accepts [`ValidatedCriteria`]; decoding for
//! display is lenient and accepts anything.
//!
//! [`ValidatedCriteria`]: crate::criteria::ValidatedCriteria

mod codec;
mod display;

pub use codec::{
    KEY_DEPARTURE, KEY_FROM, KEY_MODE, KEY_PASSENGERS, KEY_RETURN, KEY_TO, SerializedQuery,
    SubmitTarget, encode, encode_with_mode, submit_target,
};
pub use display::{DisplayFields, DisplayValue, UNAVAILABLE, decode_for_display};
