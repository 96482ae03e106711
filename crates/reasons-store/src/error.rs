//! Storage error types for reasons-store.
//!
//! [`StoreError`] covers all anticipated failure modes in the storage layer:
//! backend I/O, serialization, schema migration, and malformed input.

use thiserror::Error;

/// Errors produced by storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying SQLite connection reported an error.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// JSON serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Applying schema migrations failed.
    #[error("migration error: {0}")]
    Migration(String),

    /// A document with the same `_id` already exists in the collection.
    #[error("duplicate key: collection={collection}, id={id}")]
    DuplicateKey { collection: String, id: String },

    /// A document's `_id` was present but not a string.
    #[error("invalid document id: {0}")]
    InvalidId(String),

    /// The connection string could not be understood.
    #[error("invalid connection string: {0}")]
    InvalidUri(String),
}
