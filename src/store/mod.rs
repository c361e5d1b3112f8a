//! Document-store access layer.
//!
//! All persistence is delegated to a hosted document store reachable over
//! HTTP. The [`DocumentStore`] trait is the single seam: the SDK talks to it
//! and nothing else, so tests (and offline tooling) can substitute the
//! in-memory implementation without touching any game logic.

pub mod memory;
pub mod rest;

pub use memory::MemoryStore;
pub use rest::RestStore;

use serde_json::Value;

use crate::error::Result;

/// A collection-of-documents store with last-write-wins semantics.
///
/// Documents are JSON objects keyed by `(collection, id)`. No transactional
/// guarantees are assumed beyond a single call: concurrent writers to the
/// same document race, and the last write lands.
pub trait DocumentStore: Send {
    /// Fetch a document, or `None` if it does not exist.
    fn get(&self, collection: &str, id: &str) -> Result<Option<Value>>;

    /// Create or replace a document.
    fn set(&self, collection: &str, id: &str, doc: &Value) -> Result<()>;

    /// Merge top-level fields into a document, creating it if absent.
    ///
    /// Fields present in `fields` replace the stored field wholesale; fields
    /// not mentioned are left untouched.
    fn merge(&self, collection: &str, id: &str, fields: &Value) -> Result<()>;

    /// Delete a document. Deleting a missing document is not an error.
    fn delete(&self, collection: &str, id: &str) -> Result<()>;

    /// List every document in a collection as `(id, document)` pairs.
    fn list(&self, collection: &str) -> Result<Vec<(String, Value)>>;

    /// List documents whose top-level `field` equals `value`.
    fn query_eq(&self, collection: &str, field: &str, value: &Value)
        -> Result<Vec<(String, Value)>>;
}
