//! ReasonService: the coordinator between HTTP handlers and the document
//! store.
//!
//! All business logic flows through [`ReasonService`]. Handlers are thin
//! wrappers that delegate to these methods.
//!
//! The store lock is held for one store call at a time, never across a whole
//! operation. Write-then-read sequences are therefore two independent
//! round-trips and another request may run between them.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::Mutex;

use reasons_store::{BoxedStore, Document, Filter, ID_FIELD};

use crate::error::ApiError;
use crate::schema::reasons::{CreateReasonRequest, Reason, UpdateReasonRequest};

/// Collection holding reason documents.
pub const REASONS_COLLECTION: &str = "reasons";

/// Most documents examined by [`ReasonService::list_unvisited`].
///
/// Documents past this window are never listed, whatever their state.
pub const LIST_SCAN_LIMIT: usize = 200;

/// `visited` value of a reason that has not been visited.
pub const NOT_VISITED: &str = "false";

/// The store handle shared by every request.
pub type SharedStore = Arc<Mutex<BoxedStore>>;

/// Service implementing create / list / update for reasons.
#[derive(Clone)]
pub struct ReasonService {
    store: SharedStore,
}

impl ReasonService {
    pub fn new(store: BoxedStore) -> Self {
        ReasonService {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Persists a new reason and returns it as read back from the store.
    pub async fn create_reason(&self, req: CreateReasonRequest) -> Result<Reason, ApiError> {
        let mut doc = Document::new();
        doc.insert("reason".to_string(), Value::String(req.reason));
        doc.insert("visited".to_string(), Value::String(req.visited));

        let id = self
            .store
            .lock()
            .await
            .insert_one(REASONS_COLLECTION, doc)?;
        tracing::info!(%id, "created reason");

        self.find_by_id(&id).await?.ok_or_else(|| {
            ApiError::InternalError(format!("reason {id} vanished after insert"))
        })
    }

    /// Lists reasons whose `visited` is `"false"` among the first
    /// [`LIST_SCAN_LIMIT`] stored documents, in store order.
    pub async fn list_unvisited(&self) -> Result<Vec<Reason>, ApiError> {
        let docs = self
            .store
            .lock()
            .await
            .find(REASONS_COLLECTION, &Filter::all(), Some(LIST_SCAN_LIMIT))?;
        let examined = docs.len();

        let unvisited = docs
            .into_iter()
            .filter(|doc| doc.get("visited").and_then(Value::as_str) == Some(NOT_VISITED))
            .map(reason_from_document)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(examined, returned = unvisited.len(), "listed unvisited reasons");
        Ok(unvisited)
    }

    /// Applies `patch` to the reason with `id` and returns its current state.
    ///
    /// An empty patch performs no write and behaves as a lookup.
    pub async fn update_reason(
        &self,
        id: &str,
        patch: UpdateReasonRequest,
    ) -> Result<Reason, ApiError> {
        let set = update_set(patch);

        if !set.is_empty() {
            let result = self
                .store
                .lock()
                .await
                .update_one(REASONS_COLLECTION, &Filter::by_id(id), &set)?;
            tracing::debug!(
                id,
                matched = result.matched_count,
                modified = result.modified_count,
                "updated reason"
            );

            if result.modified_count == 1 {
                if let Some(updated) = self.find_by_id(id).await? {
                    return Ok(updated);
                }
            }
        }

        self.find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("{id} not found")))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Reason>, ApiError> {
        let doc = self
            .store
            .lock()
            .await
            .find_one(REASONS_COLLECTION, &Filter::by_id(id))?;
        doc.map(reason_from_document).transpose()
    }
}

/// Builds the store update set from the fields present in `patch`.
fn update_set(patch: UpdateReasonRequest) -> Document {
    let mut set = Document::new();
    if let Some(visited) = patch.visited {
        set.insert("visited".to_string(), Value::String(visited));
    }
    set
}

/// Converts a stored document into a [`Reason`].
///
/// Documents missing a string `_id`, `reason` or `visited` are reported as
/// internal errors.
fn reason_from_document(doc: Document) -> Result<Reason, ApiError> {
    let field = |name: &str| -> Result<String, ApiError> {
        doc.get(name)
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                ApiError::InternalError(format!(
                    "stored reason {} has no text field '{}'",
                    doc.get(ID_FIELD).unwrap_or(&Value::Null),
                    name
                ))
            })
    };

    Ok(Reason {
        id: field(ID_FIELD)?,
        reason: field("reason")?,
        visited: field("visited")?,
    })
}
