//! Backend selection from a connection string.
//!
//! Supported forms:
//! - `memory://` for an ephemeral [`InMemoryStore`]
//! - `sqlite://<path>` for a file-backed [`SqliteStore`]
//! - `sqlite::memory:` for an in-memory SQLite database

use crate::error::StoreError;
use crate::memory::InMemoryStore;
use crate::sqlite::SqliteStore;
use crate::traits::DocumentStore;

/// A store handle that can move between threads.
pub type BoxedStore = Box<dyn DocumentStore + Send>;

/// Opens the backend named by `uri`.
pub fn connect(uri: &str) -> Result<BoxedStore, StoreError> {
    let uri = uri.trim();
    if uri == "memory://" || uri == "memory:" {
        tracing::info!("using in-memory document store");
        return Ok(Box::new(InMemoryStore::new()));
    }
    if uri == "sqlite::memory:" {
        tracing::info!("using in-memory sqlite document store");
        return Ok(Box::new(SqliteStore::in_memory()?));
    }
    if let Some(path) = uri.strip_prefix("sqlite://") {
        if path.is_empty() {
            return Err(StoreError::InvalidUri(format!("{uri}: missing database path")));
        }
        tracing::info!(path, "using sqlite document store");
        return Ok(Box::new(SqliteStore::new(path)?));
    }
    Err(StoreError::InvalidUri(format!(
        "{uri}: expected memory:// or sqlite://<path>"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Filter;
    use serde_json::json;

    #[test]
    fn test_memory_uri() {
        let mut store = connect("memory://").unwrap();
        let id = store
            .insert_one("c", json!({"a": 1}).as_object().cloned().unwrap())
            .unwrap();
        assert!(store.find_one("c", &Filter::by_id(&id)).unwrap().is_some());
    }

    #[test]
    fn test_sqlite_memory_uri() {
        assert!(connect("sqlite::memory:").is_ok());
    }

    #[test]
    fn test_sqlite_file_uri() {
        let dir = tempfile::tempdir().unwrap();
        let uri = format!("sqlite://{}", dir.path().join("r.db").display());
        assert!(connect(&uri).is_ok());
    }

    #[test]
    fn test_rejects_unknown_scheme() {
        for uri in ["", "mongodb://localhost:27017", "sqlite://"] {
            match connect(uri) {
                Err(StoreError::InvalidUri(_)) => {}
                Err(other) => panic!("{uri}: expected InvalidUri, got {other:?}"),
                Ok(_) => panic!("{uri}: expected InvalidUri, got a store"),
            }
        }
    }
}
