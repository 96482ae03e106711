//! Application state shared by every handler.
//!
//! [`AppState`] is built once in `main` from the resolved [`ServerConfig`]
//! and cloned into each request. The only long-lived resource is the
//! document store handle owned by [`ReasonService`].

use reasons_store::{connect, InMemoryStore};

use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::service::ReasonService;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The reason service (cheap to clone; shares one store handle).
    pub reasons: ReasonService,
}

impl AppState {
    /// Creates a new `AppState`, connecting to the store named in `config`.
    pub fn new(config: &ServerConfig) -> Result<Self, ApiError> {
        let store = connect(&config.store_uri)?;
        Ok(AppState {
            reasons: ReasonService::new(store),
        })
    }

    /// Creates a new `AppState` with an in-memory store (for testing).
    pub fn in_memory() -> Self {
        AppState {
            reasons: ReasonService::new(Box::new(InMemoryStore::new())),
        }
    }
}
