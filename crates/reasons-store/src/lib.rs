//! Schema-less document storage for the reasons service.
//!
//! Provides the [`DocumentStore`] trait defining the storage contract that all
//! backends implement, plus the [`InMemoryStore`] and [`SqliteStore`] as
//! first-class backends.
//!
//! # Architecture
//!
//! Documents are JSON objects grouped into named collections. Every document
//! carries a string `_id` assigned by the store on insert. Reads and writes
//! select documents with a [`Filter`] of field equality conditions.
//!
//! # Modules
//!
//! - [`error`]: StoreError enum with all failure modes
//! - [`types`]: Document alias and UpdateResult
//! - [`filter`]: equality filters over documents
//! - [`object_id`]: store-assigned identifiers
//! - [`traits`]: DocumentStore trait definition
//! - [`memory`]: InMemoryStore implementation
//! - [`schema`]: SQL schema and migration setup
//! - [`sqlite`]: SqliteStore implementation
//! - [`connect`]: backend selection from a connection string

pub mod connect;
pub mod error;
pub mod filter;
pub mod memory;
pub mod object_id;
pub mod schema;
pub mod sqlite;
pub mod traits;
pub mod types;

// Re-export key types for ergonomic use.
pub use connect::{connect, BoxedStore};
pub use error::StoreError;
pub use filter::Filter;
pub use memory::InMemoryStore;
pub use object_id::ObjectId;
pub use sqlite::SqliteStore;
pub use traits::DocumentStore;
pub use types::{Document, UpdateResult, ID_FIELD};
