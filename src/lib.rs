//! Campus TCG SDK for Rust.
//!
//! Provides a high-level client for the Campus TCG game backend: the card
//! catalog, per-user collection records, weighted booster generation, the
//! free-booster entitlement clock, and the memory mini-game. Persistence is
//! delegated to a hosted document store; the immutable card catalog is
//! snapshotted to a local cache directory.
//!
//! # Quick start
//!
//! ```no_run
//! use campus_tcg_sdk::CampusSdk;
//!
//! let sdk = CampusSdk::builder().build().unwrap();
//!
//! // Query cards
//! let shinies = sdk.cards().by_rarity(campus_tcg_sdk::models::Rarity::Shiny).unwrap();
//!
//! // Open a booster for a user
//! let pack = sdk.boosters().open_pack("user-123").unwrap();
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod backend;
pub mod booster;
pub mod catalog;
pub mod config;
pub mod entitlement;
pub mod error;
pub mod memory;
pub mod models;
pub mod queries;
pub mod store;

#[cfg(feature = "async")]
pub use async_client::AsyncCampusSdk;
pub use backend::Backend;
pub use catalog::CatalogCache;
pub use error::{CampusError, Result};
pub use store::{DocumentStore, MemoryStore, RestStore};

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ---------------------------------------------------------------------------
// CampusSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`CampusSdk`] instance.
///
/// Use [`CampusSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](CampusSdkBuilder::build) to create the SDK.
pub struct CampusSdkBuilder {
    api_base: Option<String>,
    service_key: Option<String>,
    cache_dir: Option<PathBuf>,
    offline: bool,
    timeout: Duration,
    store: Option<Box<dyn DocumentStore>>,
}

impl Default for CampusSdkBuilder {
    fn default() -> Self {
        Self {
            api_base: None,
            service_key: None,
            cache_dir: None,
            offline: false,
            timeout: Duration::from_secs(30),
            store: None,
        }
    }
}

impl CampusSdkBuilder {
    /// Set the store base URL explicitly.
    ///
    /// If not set, the `CAMPUS_API_BASE` environment variable is used.
    pub fn api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = Some(base.into());
        self
    }

    /// Set the service key explicitly.
    ///
    /// If not set, the `CAMPUS_SERVICE_KEY` environment variable is used.
    /// The key is sent only to the store, never surfaced to clients.
    pub fn service_key(mut self, key: impl Into<String>) -> Self {
        self.service_key = Some(key.into());
        self
    }

    /// Set a custom cache directory for the catalog snapshot.
    ///
    /// If not set, the platform-appropriate default cache directory is used
    /// (e.g. `~/.cache/campus-tcg-sdk` on Linux).
    pub fn cache_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.cache_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Enable or disable offline mode.
    ///
    /// When offline, the catalog is served exclusively from the local
    /// snapshot and never re-fetched. User-record operations still go to
    /// the store. Defaults to `false`.
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// Set the HTTP request timeout for store calls.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Substitute a custom document store.
    ///
    /// Replaces the REST store entirely; `api_base`, `service_key`, and
    /// `timeout` are ignored. This is the seam tests use to run against
    /// [`MemoryStore`](crate::store::MemoryStore).
    pub fn store(mut self, store: Box<dyn DocumentStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Build the SDK, initializing the store client and catalog cache.
    ///
    /// Does **not** fetch anything eagerly -- the catalog is loaded lazily
    /// on first query.
    pub fn build(self) -> Result<CampusSdk> {
        let store: Box<dyn DocumentStore> = match self.store {
            Some(store) => store,
            None => {
                let base = self
                    .api_base
                    .or_else(config::api_base_from_env)
                    .ok_or_else(|| {
                        CampusError::InvalidArgument(format!(
                            "no store base URL configured; set {} or call api_base()",
                            config::ENV_API_BASE
                        ))
                    })?;
                let key = self.service_key.or_else(config::service_key_from_env);
                Box::new(RestStore::new(base, key, self.timeout)?)
            }
        };
        let cache = CatalogCache::new(self.cache_dir, self.offline)?;
        Ok(CampusSdk {
            backend: Backend::new(store, cache),
        })
    }
}

// ---------------------------------------------------------------------------
// CampusSdk
// ---------------------------------------------------------------------------

/// The main entry point for the Campus TCG SDK.
///
/// Wraps a [`Backend`] (which owns the document store handle and the
/// catalog cache) and exposes domain-specific query interfaces as
/// lightweight borrowing wrappers.
///
/// Created via [`CampusSdk::builder()`].
pub struct CampusSdk {
    backend: Backend,
}

impl CampusSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> CampusSdkBuilder {
        CampusSdkBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the card catalog query interface.
    pub fn cards(&self) -> queries::cards::CardQuery<'_> {
        queries::cards::CardQuery::new(&self.backend)
    }

    /// Access the user collection query interface.
    pub fn collections(&self) -> queries::collections::CollectionQuery<'_> {
        queries::collections::CollectionQuery::new(&self.backend)
    }

    /// Access the booster pack opener.
    ///
    /// Generates weighted packs against the catalog pools and commits
    /// opened packs to the user's collection record.
    pub fn boosters(&self) -> queries::boosters::BoosterQuery<'_> {
        queries::boosters::BoosterQuery::new(&self.backend)
    }

    /// Access the free-booster entitlement interface.
    pub fn entitlement(&self) -> queries::entitlement::EntitlementQuery<'_> {
        queries::entitlement::EntitlementQuery::new(&self.backend)
    }

    /// Access the memory mini-game interface.
    pub fn minigame(&self) -> queries::minigame::MinigameQuery<'_> {
        queries::minigame::MinigameQuery::new(&self.backend)
    }

    // -- Metadata and utility methods --------------------------------------

    /// Drop the cached catalog snapshot so the next query re-reads the
    /// store.
    pub fn refresh(&self) -> Result<()> {
        self.backend.cache.borrow().clear()?;
        self.backend.reset_catalog();
        eprintln!("Catalog snapshot cleared; next query re-fetches from the store");
        Ok(())
    }

    /// Consume the SDK and release all resources.
    ///
    /// This is called automatically when the SDK is dropped, but can be
    /// invoked explicitly for deterministic cleanup.
    pub fn close(self) {
        drop(self);
    }

    /// Return a reference to the underlying [`Backend`] for advanced usage.
    pub fn backend(&self) -> &Backend {
        &self.backend
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for CampusSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cache = self.backend.cache.borrow();
        write!(
            f,
            "CampusSdk(cache_dir={}, offline={}, catalog_loaded={})",
            cache.cache_dir.display(),
            cache.offline,
            self.backend.catalog_loaded()
        )
    }
}
