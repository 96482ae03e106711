//! In-memory implementation of [`DocumentStore`].
//!
//! [`InMemoryStore`] is a first-class backend for tests, ephemeral sessions,
//! and anywhere persistence isn't needed. Each collection is an `IndexMap`
//! keyed by `_id`, so iteration follows insertion order exactly like the
//! SQLite backend's `seq` column.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::error::StoreError;
use crate::filter::Filter;
use crate::traits::DocumentStore;
use crate::types::{apply_set, assign_id, check_set, Document, UpdateResult};

type Collection = IndexMap<String, Document>;

/// In-memory implementation of [`DocumentStore`].
#[derive(Debug, Default)]
pub struct InMemoryStore {
    collections: HashMap<String, Collection>,
}

impl InMemoryStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    fn matching<'a>(
        &'a self,
        collection: &str,
        filter: &'a Filter,
    ) -> impl Iterator<Item = &'a Document> + 'a {
        self.collections
            .get(collection)
            .into_iter()
            .flat_map(|docs| docs.values())
            .filter(move |doc| filter.matches(doc))
    }
}

impl DocumentStore for InMemoryStore {
    fn insert_one(&mut self, collection: &str, mut doc: Document) -> Result<String, StoreError> {
        let id = assign_id(&mut doc)?;
        let docs = self.collections.entry(collection.to_string()).or_default();
        if docs.contains_key(&id) {
            return Err(StoreError::DuplicateKey {
                collection: collection.to_string(),
                id,
            });
        }
        docs.insert(id.clone(), doc);
        Ok(id)
    }

    fn find_one(&self, collection: &str, filter: &Filter) -> Result<Option<Document>, StoreError> {
        if let Some(id) = filter.id_lookup() {
            return Ok(self
                .collections
                .get(collection)
                .and_then(|docs| docs.get(id))
                .cloned());
        }
        Ok(self.matching(collection, filter).next().cloned())
    }

    fn find(
        &self,
        collection: &str,
        filter: &Filter,
        limit: Option<usize>,
    ) -> Result<Vec<Document>, StoreError> {
        let matching = self.matching(collection, filter).cloned();
        Ok(match limit {
            Some(n) => matching.take(n).collect(),
            None => matching.collect(),
        })
    }

    fn update_one(
        &mut self,
        collection: &str,
        filter: &Filter,
        set: &Document,
    ) -> Result<UpdateResult, StoreError> {
        check_set(set)?;
        let Some(docs) = self.collections.get_mut(collection) else {
            return Ok(UpdateResult::default());
        };
        let Some(doc) = docs.values_mut().find(|doc| filter.matches(doc)) else {
            return Ok(UpdateResult::default());
        };
        let modified = apply_set(doc, set);
        Ok(UpdateResult {
            matched_count: 1,
            modified_count: u64::from(modified),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object_id::ObjectId;
    use serde_json::Value;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_insert_assigns_object_id() {
        let mut store = InMemoryStore::new();
        let id = store
            .insert_one("reasons", doc(json!({"reason": "a", "visited": "false"})))
            .unwrap();
        assert!(ObjectId::is_valid(&id));

        let found = store.find_one("reasons", &Filter::by_id(&id)).unwrap().unwrap();
        assert_eq!(found["_id"], json!(id));
        assert_eq!(found["reason"], "a");
    }

    #[test]
    fn test_insert_keeps_explicit_id_and_rejects_duplicate() {
        let mut store = InMemoryStore::new();
        let id = store.insert_one("c", doc(json!({"_id": "custom"}))).unwrap();
        assert_eq!(id, "custom");

        let err = store.insert_one("c", doc(json!({"_id": "custom"}))).unwrap_err();
        match err {
            StoreError::DuplicateKey { collection, id } => {
                assert_eq!(collection, "c");
                assert_eq!(id, "custom");
            }
            other => panic!("expected DuplicateKey, got: {:?}", other),
        }
    }

    #[test]
    fn test_insert_rejects_non_string_id() {
        let mut store = InMemoryStore::new();
        let result = store.insert_one("c", doc(json!({"_id": 42})));
        assert!(matches!(result, Err(StoreError::InvalidId(_))));
    }

    #[test]
    fn test_find_respects_order_filter_and_limit() {
        let mut store = InMemoryStore::new();
        for i in 0..10 {
            let visited = if i % 2 == 0 { "false" } else { "true" };
            store
                .insert_one("c", doc(json!({"n": i, "visited": visited})))
                .unwrap();
        }

        let all = store.find("c", &Filter::all(), None).unwrap();
        let ns: Vec<i64> = all.iter().map(|d| d["n"].as_i64().unwrap()).collect();
        assert_eq!(ns, (0..10).collect::<Vec<_>>());

        let first_three = store.find("c", &Filter::all(), Some(3)).unwrap();
        assert_eq!(first_three.len(), 3);

        let unvisited = store
            .find("c", &Filter::all().and_eq("visited", "false"), None)
            .unwrap();
        assert_eq!(unvisited.len(), 5);
        let visited = store
            .find("c", &Filter::all().and_eq("visited", "true"), None)
            .unwrap();
        assert_eq!(visited.len(), 5);
    }

    #[test]
    fn test_unknown_collection_is_empty() {
        let store = InMemoryStore::new();
        assert!(store.find("nope", &Filter::all(), None).unwrap().is_empty());
        assert!(store.find_one("nope", &Filter::by_id("x")).unwrap().is_none());
    }

    #[test]
    fn test_update_one_counts() {
        let mut store = InMemoryStore::new();
        let id = store.insert_one("c", doc(json!({"visited": "false"}))).unwrap();
        let set = doc(json!({"visited": "true"}));

        let first = store.update_one("c", &Filter::by_id(&id), &set).unwrap();
        assert_eq!(first, UpdateResult { matched_count: 1, modified_count: 1 });

        let again = store.update_one("c", &Filter::by_id(&id), &set).unwrap();
        assert_eq!(again, UpdateResult { matched_count: 1, modified_count: 0 });

        let missing = store
            .update_one("c", &Filter::by_id("000000000000000000000000"), &set)
            .unwrap();
        assert_eq!(missing, UpdateResult::default());

        let found = store.find_one("c", &Filter::by_id(&id)).unwrap().unwrap();
        assert_eq!(found["visited"], "true");
    }

    #[test]
    fn test_update_one_touches_only_first_match() {
        let mut store = InMemoryStore::new();
        store.insert_one("c", doc(json!({"k": 1, "v": "a"}))).unwrap();
        store.insert_one("c", doc(json!({"k": 1, "v": "a"}))).unwrap();

        let result = store
            .update_one("c", &Filter::all().and_eq("k", 1), &doc(json!({"v": "b"})))
            .unwrap();
        assert_eq!(result.modified_count, 1);
        let changed = store.find("c", &Filter::all().and_eq("v", "b"), None).unwrap();
        assert_eq!(changed.len(), 1);
    }

    #[test]
    fn test_update_rejects_id_change() {
        let mut store = InMemoryStore::new();
        let id = store.insert_one("c", doc(json!({}))).unwrap();
        let result = store.update_one("c", &Filter::by_id(&id), &doc(json!({"_id": "other"})));
        assert!(matches!(result, Err(StoreError::InvalidId(_))));
    }
}
