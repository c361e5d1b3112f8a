//! In-memory implementation of [`DocumentStore`].
//!
//! Backs the integration tests and offline tooling. Collections are plain
//! maps behind a mutex; `merge` performs the same top-level field merge the
//! REST store's `PATCH` performs.

use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

use serde_json::Value;

use crate::error::{CampusError, Result};
use crate::store::DocumentStore;

#[derive(Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<String, BTreeMap<String, Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, BTreeMap<String, Value>>>> {
        self.collections
            .lock()
            .map_err(|_| CampusError::InvalidArgument("store lock poisoned".into()))
    }
}

impl DocumentStore for MemoryStore {
    fn get(&self, collection: &str, id: &str) -> Result<Option<Value>> {
        let guard = self.lock()?;
        Ok(guard
            .get(collection)
            .and_then(|docs| docs.get(id))
            .cloned())
    }

    fn set(&self, collection: &str, id: &str, doc: &Value) -> Result<()> {
        if !doc.is_object() {
            return Err(CampusError::InvalidArgument(
                "documents must be JSON objects".into(),
            ));
        }
        let mut guard = self.lock()?;
        guard
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), doc.clone());
        Ok(())
    }

    fn merge(&self, collection: &str, id: &str, fields: &Value) -> Result<()> {
        let incoming = fields.as_object().ok_or_else(|| {
            CampusError::InvalidArgument("merge fields must be a JSON object".into())
        })?;

        let mut guard = self.lock()?;
        let doc = guard
            .entry(collection.to_string())
            .or_default()
            .entry(id.to_string())
            .or_insert_with(|| Value::Object(serde_json::Map::new()));

        let existing = doc.as_object_mut().ok_or_else(|| {
            CampusError::InvalidArgument("stored document is not a JSON object".into())
        })?;

        for (key, value) in incoming {
            existing.insert(key.clone(), value.clone());
        }
        Ok(())
    }

    fn delete(&self, collection: &str, id: &str) -> Result<()> {
        let mut guard = self.lock()?;
        if let Some(docs) = guard.get_mut(collection) {
            docs.remove(id);
        }
        Ok(())
    }

    fn list(&self, collection: &str) -> Result<Vec<(String, Value)>> {
        let guard = self.lock()?;
        Ok(guard
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .map(|(id, doc)| (id.clone(), doc.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }

    fn query_eq(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> Result<Vec<(String, Value)>> {
        let guard = self.lock()?;
        Ok(guard
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|(_, doc)| doc.get(field) == Some(value))
                    .map(|(id, doc)| (id.clone(), doc.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }
}
