//! Equality filters for selecting documents.
//!
//! A [`Filter`] is a conjunction of `field == value` conditions. The empty
//! filter matches every document.

use serde_json::Value;

use crate::types::{Document, ID_FIELD};

/// A conjunction of field equality conditions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    conditions: Vec<(String, Value)>,
}

impl Filter {
    /// A filter matching every document.
    pub fn all() -> Self {
        Filter::default()
    }

    /// A filter matching the document whose `_id` equals `id`.
    pub fn by_id(id: &str) -> Self {
        Filter::all().and_eq(ID_FIELD, id)
    }

    /// Adds a `field == value` condition.
    pub fn and_eq(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.conditions.push((field.to_string(), value.into()));
        self
    }

    /// Returns `true` if every condition holds for `doc`.
    ///
    /// A missing field never equals anything, including `null`.
    pub fn matches(&self, doc: &Document) -> bool {
        self.conditions
            .iter()
            .all(|(field, expected)| doc.get(field) == Some(expected))
    }

    /// If the filter is exactly one `_id` condition on a string, returns it.
    ///
    /// Backends use this to serve id lookups without a scan.
    pub fn id_lookup(&self) -> Option<&str> {
        match self.conditions.as_slice() {
            [(field, Value::String(id))] if field == ID_FIELD => Some(id),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}
