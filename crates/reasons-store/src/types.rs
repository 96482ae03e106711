//! Storage-layer types shared by every backend.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::StoreError;
use crate::object_id::ObjectId;

/// Name of the identifier field every stored document carries.
pub const ID_FIELD: &str = "_id";

/// A stored document: a JSON object with arbitrary fields.
pub type Document = serde_json::Map<String, serde_json::Value>;

/// Outcome of an update-by-filter operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateResult {
    /// Number of documents that matched the filter.
    pub matched_count: u64,
    /// Number of documents whose contents actually changed.
    ///
    /// Setting a field to the value it already holds matches but does not
    /// modify.
    pub modified_count: u64,
}

/// Applies `set` to `doc` field by field.
///
/// Returns `true` if any field value changed.
pub(crate) fn apply_set(doc: &mut Document, set: &Document) -> bool {
    let mut changed = false;
    for (key, value) in set {
        if doc.get(key) != Some(value) {
            doc.insert(key.clone(), value.clone());
            changed = true;
        }
    }
    changed
}

/// Ensures `doc` carries a string `_id`, generating one if absent.
pub(crate) fn assign_id(doc: &mut Document) -> Result<String, StoreError> {
    match doc.get(ID_FIELD) {
        Some(Value::String(id)) => Ok(id.clone()),
        Some(other) => Err(StoreError::InvalidId(other.to_string())),
        None => {
            let id = ObjectId::new().to_hex();
            doc.insert(ID_FIELD.to_string(), Value::String(id.clone()));
            Ok(id)
        }
    }
}

/// Rejects update sets that would rewrite `_id`.
pub(crate) fn check_set(set: &Document) -> Result<(), StoreError> {
    if set.contains_key(ID_FIELD) {
        return Err(StoreError::InvalidId(format!(
            "{} is immutable and cannot be set",
            ID_FIELD
        )));
    }
    Ok(())
}
