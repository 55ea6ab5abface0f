//! Catalog error types.

use std::path::PathBuf;

/// Errors that can occur when loading the location catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("failed to read catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog JSON did not parse
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Catalog parsed but lists no locations
    #[error("catalog contains no locations")]
    Empty,
}
