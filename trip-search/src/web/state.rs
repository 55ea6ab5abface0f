//! Application state for the web layer.

use std::sync::Arc;

use crate::catalog::LocationCatalog;
use crate::criteria::FormConfig;

/// Shared application state.
///
/// Everything in here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Known locations for autocomplete
    pub catalog: Arc<LocationCatalog>,

    /// Search form configuration
    pub config: Arc<FormConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(catalog: LocationCatalog, config: FormConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            config: Arc::new(config),
        }
    }
}
