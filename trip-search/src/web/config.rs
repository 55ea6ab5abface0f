//! Server configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Default static assets directory.
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Errors in server configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// BIND_ADDR is not a socket address
    #[error("invalid BIND_ADDR {value:?}: {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (`BIND_ADDR`).
    pub bind_addr: SocketAddr,

    /// Directory served under `/static` (`STATIC_DIR`).
    pub static_dir: String,

    /// Location catalog file (`CATALOG_PATH`); the bundled catalog is used
    /// when unset.
    pub catalog_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through a variable lookup function.
    ///
    /// Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_value = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_value
            .trim()
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: bind_value.clone(),
                source,
            })?;

        Ok(Self {
            bind_addr,
            static_dir: get("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
            catalog_path: get("CATALOG_PATH").map(PathBuf::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.static_dir, "static");
        assert_eq!(config.catalog_path, None);
    }

    #[test]
    fn overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("BIND_ADDR", "0.0.0.0:8080"),
            ("STATIC_DIR", "/srv/static"),
            ("CATALOG_PATH", "/etc/trip-search/locations.json"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.static_dir, "/srv/static");
        assert_eq!(
            config.catalog_path,
            Some(PathBuf::from("/etc/trip-search/locations.json"))
        );
    }

    #[test]
    fn blank_values_use_defaults() {
        let config =
            ServerConfig::from_lookup(lookup(&[("BIND_ADDR", " "), ("CATALOG_PATH", "")]))
                .unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.catalog_path, None);
    }

    #[test]
    fn invalid_bind_addr() {
        let err = ServerConfig::from_lookup(lookup(&[("BIND_ADDR", "localhost")])).unwrap_err();
        assert!(err.to_string().starts_with("invalid BIND_ADDR \"localhost\""));
    }
}
