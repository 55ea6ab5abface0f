//! Static location catalog.
//!
//! Provides the list of known places used for autocomplete, loaded from a
//! bundled JSON file or from a file named at startup. The catalog is never
//! mutated after loading.

mod error;
mod locations;

pub use error::CatalogError;
pub use locations::{Location, LocationCatalog};
