//! Runtime configuration resolved once at process startup.
//!
//! [`ServerConfig`] is built from the environment in `main` and passed into
//! [`AppState`](crate::state::AppState); request handlers never read
//! environment variables.

use std::net::SocketAddr;

use thiserror::Error;

/// Environment variable holding the document store connection string.
pub const STORE_URI_VAR: &str = "REASONS_STORE_URI";

/// Environment variable holding the listen address.
pub const ADDR_VAR: &str = "REASONS_ADDR";

pub const DEFAULT_ADDR: &str = "0.0.0.0:3000";

/// Tracing filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "reasons_server=info,reasons_store=info,tower_http=info";

/// Errors raised while resolving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Document store connection string, e.g. `sqlite://reasons.db`.
    pub store_uri: String,
    /// Address the HTTP listener binds to.
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store_uri = lookup(STORE_URI_VAR)
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing(STORE_URI_VAR))?;

        let addr_raw = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_raw.parse().map_err(|e| ConfigError::Invalid {
            var: ADDR_VAR,
            reason: format!("{addr_raw}: {e}"),
        })?;

        Ok(ServerConfig { store_uri, addr })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn test_store_uri_is_required() {
        let err = ServerConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing(STORE_URI_VAR)));

        let err = ServerConfig::from_lookup(lookup(&[(STORE_URI_VAR, "  ")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing(STORE_URI_VAR)));
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[(STORE_URI_VAR, "memory://")])).unwrap();
        assert_eq!(config.store_uri, "memory://");
        assert_eq!(config.addr, DEFAULT_ADDR.parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_custom_addr() {
        let config = ServerConfig::from_lookup(lookup(&[
            (STORE_URI_VAR, "sqlite://reasons.db"),
            (ADDR_VAR, "127.0.0.1:8080"),
        ]))
        .unwrap();
        assert_eq!(config.addr.port(), 8080);
    }

    #[test]
    fn test_bad_addr() {
        let err = ServerConfig::from_lookup(lookup(&[
            (STORE_URI_VAR, "memory://"),
            (ADDR_VAR, "not-an-address"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: ADDR_VAR, .. }));
    }
}
