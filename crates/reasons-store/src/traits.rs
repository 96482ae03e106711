//! The [`DocumentStore`] trait defining the storage contract for documents.
//!
//! All backends (InMemoryStore, SqliteStore) implement this trait, so the
//! service layer can swap them without changing its logic. The trait is
//! synchronous; callers share a store behind an async mutex.

use crate::error::StoreError;
use crate::filter::Filter;
use crate::types::{Document, UpdateResult};

/// The storage contract for schema-less documents.
pub trait DocumentStore {
    /// Inserts a document into `collection`.
    ///
    /// If the document has no `_id`, the store assigns a fresh
    /// [`ObjectId`](crate::ObjectId) rendered as a hex string. Returns the
    /// `_id` of the stored document.
    fn insert_one(&mut self, collection: &str, doc: Document) -> Result<String, StoreError>;

    /// Returns the first document in `collection` matching `filter`.
    fn find_one(&self, collection: &str, filter: &Filter) -> Result<Option<Document>, StoreError>;

    /// Returns documents in `collection` matching `filter`, in insertion
    /// order, stopping after `limit` documents when one is given.
    fn find(
        &self,
        collection: &str,
        filter: &Filter,
        limit: Option<usize>,
    ) -> Result<Vec<Document>, StoreError>;

    /// Sets the fields in `set` on the first document matching `filter`.
    ///
    /// Setting `_id` is not allowed.
    fn update_one(
        &mut self,
        collection: &str,
        filter: &Filter,
        set: &Document,
    ) -> Result<UpdateResult, StoreError>;
}
