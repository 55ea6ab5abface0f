//! Trip search form server.
//!
//! Collects a bus trip's origin, destination, dates and passenger count,
//! validates them, and hands them to a results view as a query string.

pub mod catalog;
pub mod criteria;
pub mod domain;
pub mod query;
pub mod web;
