//! Form configuration.

/// Search category written to the `mode` key of every query.
pub const DEFAULT_MODE: &str = "bus";

/// Path of the results view that consumes serialized queries.
pub const DEFAULT_RESULTS_PATH: &str = "/search";

/// Configuration parameters for the search form.
#[derive(Debug, Clone)]
pub struct FormConfig {
    /// Search category written to the `mode` key.
    pub mode: String,

    /// Path the form hands off to on a successful submit.
    pub results_path: String,

    /// Number of autocomplete suggestions returned when none is requested.
    pub default_suggestions: usize,

    /// Upper bound on autocomplete suggestions per request.
    pub max_suggestions: usize,
}

impl FormConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        mode: impl Into<String>,
        results_path: impl Into<String>,
        default_suggestions: usize,
        max_suggestions: usize,
    ) -> Self {
        Self {
            mode: mode.into(),
            results_path: results_path.into(),
            default_suggestions,
            max_suggestions,
        }
    }

    /// Resolve a requested suggestion count against the configured bounds.
    pub fn suggestion_limit(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.default_suggestions)
            .min(self.max_suggestions)
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            mode: DEFAULT_MODE.to_string(),
            results_path: DEFAULT_RESULTS_PATH.to_string(),
            default_suggestions: 10,
            max_suggestions: 50,
        }
    }
}
