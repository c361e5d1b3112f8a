//! Disk-backed snapshot cache for the immutable card catalog.
//!
//! The card set changes only through admin seeding, so the SDK snapshots the
//! whole `cards` collection to the local cache directory and serves reads
//! from it. Offline mode uses the snapshot exclusively; online mode
//! refreshes it from the store and falls back to it when the store is
//! unreachable.

use std::fs;
use std::path::PathBuf;

use serde_json::Value;

use crate::config;
use crate::error::{CampusError, Result};
use crate::models::Card;
use crate::store::DocumentStore;

pub struct CatalogCache {
    /// Directory where the snapshot is stored.
    pub cache_dir: PathBuf,
    /// If true, never contact the store; serve the snapshot only.
    pub offline: bool,
}

impl CatalogCache {
    /// Create a catalog cache.
    ///
    /// If `cache_dir` is `None`, uses the platform-appropriate default cache
    /// directory. Creates the directory if it does not exist.
    pub fn new(cache_dir: Option<PathBuf>, offline: bool) -> Result<Self> {
        let dir = cache_dir.unwrap_or_else(config::default_cache_dir);
        fs::create_dir_all(&dir)?;
        Ok(Self {
            cache_dir: dir,
            offline,
        })
    }

    fn snapshot_path(&self) -> PathBuf {
        self.cache_dir.join("cards.json")
    }

    /// Load the catalog, refreshing the snapshot from the store when online.
    ///
    /// Online: fetches the full `cards` collection, writes the snapshot
    /// atomically, and returns the fetched cards. If the store is
    /// unreachable but a snapshot exists, the snapshot is served instead.
    /// Offline: reads the snapshot only; missing snapshot is an error.
    pub fn load(&self, store: &dyn DocumentStore) -> Result<Vec<Card>> {
        if self.offline {
            return self.read_snapshot()?.ok_or_else(|| {
                CampusError::NotFound(
                    "card catalog not cached and offline mode is enabled".into(),
                )
            });
        }

        match store.list(config::CARDS_COLLECTION) {
            Ok(docs) => {
                let cards = cards_from_docs(docs);
                self.write_snapshot(&cards)?;
                Ok(cards)
            }
            Err(e) => {
                if let Some(cards) = self.read_snapshot()? {
                    eprintln!("Card store unreachable ({}); serving cached catalog", e);
                    Ok(cards)
                } else {
                    Err(e)
                }
            }
        }
    }

    /// Read and parse the snapshot, if present.
    ///
    /// A corrupt snapshot (truncated write, disk error) is deleted so the
    /// next online load writes a fresh copy.
    fn read_snapshot(&self) -> Result<Option<Vec<Card>>> {
        let path = self.snapshot_path();
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)?;
        match serde_json::from_str::<Vec<Card>>(&contents) {
            Ok(cards) => Ok(Some(cards)),
            Err(e) => {
                eprintln!("Corrupt catalog snapshot {}: {} -- removing", path.display(), e);
                let _ = fs::remove_file(&path);
                Ok(None)
            }
        }
    }

    /// Write the snapshot to a temp file and rename on success, so an
    /// interrupted write never leaves a corrupt partial file behind.
    fn write_snapshot(&self, cards: &[Card]) -> Result<()> {
        let dest = self.snapshot_path();
        let tmp_dest = dest.with_extension("json.tmp");

        let result = (|| -> Result<()> {
            let body = serde_json::to_vec(cards)?;
            fs::write(&tmp_dest, &body)?;
            fs::rename(&tmp_dest, &dest)?;
            Ok(())
        })();

        if result.is_err() {
            let _ = fs::remove_file(&tmp_dest);
        }

        result
    }

    /// Remove the snapshot and recreate the cache directory.
    pub fn clear(&self) -> Result<()> {
        if self.cache_dir.exists() {
            fs::remove_dir_all(&self.cache_dir)?;
            fs::create_dir_all(&self.cache_dir)?;
        }
        Ok(())
    }
}

/// Convert raw `(id, document)` pairs into typed cards, stamping each card
/// with its document id. Documents that fail to parse are skipped.
fn cards_from_docs(docs: Vec<(String, Value)>) -> Vec<Card> {
    docs.into_iter()
        .filter_map(|(id, doc)| {
            let mut card: Card = serde_json::from_value(doc).ok()?;
            card.id = id;
            Some(card)
        })
        .collect()
}
