//! Web layer for the trip search form.
//!
//! Serves the form, the results view and a small JSON API for location
//! suggestions and criteria validation.

mod config;
mod dto;
mod routes;
mod state;
pub mod templates;

pub use config::{ConfigError, DEFAULT_BIND_ADDR, DEFAULT_STATIC_DIR, ServerConfig};
pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
