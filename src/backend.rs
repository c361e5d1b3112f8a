//! Storage backend: the document store plus the catalog cache.
//!
//! Owns the [`DocumentStore`] handle and the [`CatalogCache`], memoizes the
//! catalog snapshot for the life of the process, and converts untyped user
//! documents into typed [`UserCollection`] values with explicit default
//! filling at the store boundary.

use std::cell::RefCell;
use std::sync::Arc;

use serde_json::Value;

use crate::catalog::CatalogCache;
use crate::config;
use crate::error::Result;
use crate::models::{Card, UserCollection};
use crate::store::DocumentStore;

pub struct Backend {
    store: Box<dyn DocumentStore>,
    /// The catalog cache used to snapshot/locate card data.
    pub cache: RefCell<CatalogCache>,
    catalog: RefCell<Option<Arc<Vec<Card>>>>,
}

impl Backend {
    /// Create a backend over the given store and catalog cache.
    pub fn new(store: Box<dyn DocumentStore>, cache: CatalogCache) -> Self {
        Self {
            store,
            cache: RefCell::new(cache),
            catalog: RefCell::new(None),
        }
    }

    /// Access the underlying document store for advanced usage.
    pub fn store(&self) -> &dyn DocumentStore {
        self.store.as_ref()
    }

    // -- Catalog -----------------------------------------------------------

    /// The card catalog, loaded lazily on first access and memoized.
    pub fn catalog(&self) -> Result<Arc<Vec<Card>>> {
        if let Some(cards) = self.catalog.borrow().as_ref() {
            return Ok(Arc::clone(cards));
        }
        let cards = Arc::new(self.cache.borrow().load(self.store.as_ref())?);
        *self.catalog.borrow_mut() = Some(Arc::clone(&cards));
        Ok(cards)
    }

    /// Whether the catalog snapshot has been loaded this session.
    pub fn catalog_loaded(&self) -> bool {
        self.catalog.borrow().is_some()
    }

    /// Drop the memoized catalog so the next access re-reads the store.
    pub fn reset_catalog(&self) {
        *self.catalog.borrow_mut() = None;
    }

    // -- User records ------------------------------------------------------

    /// Read a user's collection record, default-filled.
    ///
    /// A missing document yields the default record rather than an error:
    /// users exist implicitly the first time they are looked up.
    pub fn user(&self, user_id: &str) -> Result<UserCollection> {
        match self.store.get(config::USERS_COLLECTION, user_id)? {
            Some(doc) => Ok(serde_json::from_value(doc).unwrap_or_default()),
            None => Ok(UserCollection::default()),
        }
    }

    /// Replace a user's collection record wholesale.
    pub fn save_user(&self, user_id: &str, record: &UserCollection) -> Result<()> {
        let doc = serde_json::to_value(record)?;
        self.store.set(config::USERS_COLLECTION, user_id, &doc)
    }

    /// Merge top-level fields into a user's collection record.
    pub fn merge_user(&self, user_id: &str, fields: Value) -> Result<()> {
        self.store.merge(config::USERS_COLLECTION, user_id, &fields)
    }

    /// All user records as `(id, record)` pairs, default-filled.
    pub fn users(&self) -> Result<Vec<(String, UserCollection)>> {
        let docs = self.store.list(config::USERS_COLLECTION)?;
        Ok(docs
            .into_iter()
            .map(|(id, doc)| (id, serde_json::from_value(doc).unwrap_or_default()))
            .collect())
    }
}
