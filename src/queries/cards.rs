//! Card catalog queries against the cached snapshot.

use rand::seq::SliceRandom;
use rand::thread_rng;
use serde_json::json;

use crate::config;
use crate::error::Result;
use crate::models::{Card, CardPools, Rarity};

// ---------------------------------------------------------------------------
// CardQuery
// ---------------------------------------------------------------------------

/// Query interface for the card catalog.
///
/// Reads are served from the memoized catalog snapshot; the seeding and
/// wipe operations write through to the store and invalidate the snapshot.
pub struct CardQuery<'a> {
    backend: &'a crate::backend::Backend,
}

impl<'a> CardQuery<'a> {
    /// Create a new `CardQuery` bound to the given backend.
    pub fn new(backend: &'a crate::backend::Backend) -> Self {
        Self { backend }
    }

    // -- Single card lookup ------------------------------------------------

    /// Retrieve a single card by its id.
    pub fn get_by_id(&self, id: &str) -> Result<Option<Card>> {
        let catalog = self.backend.catalog()?;
        Ok(catalog.iter().find(|c| c.id == id).cloned())
    }

    // -- Batch lookup ------------------------------------------------------

    /// Retrieve multiple cards by id, preserving request order and
    /// duplicates. Unknown ids are skipped.
    pub fn get_by_ids(&self, ids: &[&str]) -> Result<Vec<Card>> {
        let catalog = self.backend.catalog()?;
        let mut out = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(card) = catalog.iter().find(|c| &c.id == id) {
                out.push(card.clone());
            }
        }
        Ok(out)
    }

    // -- Listing -----------------------------------------------------------

    /// Every card in the catalog.
    pub fn all(&self) -> Result<Vec<Card>> {
        Ok(self.backend.catalog()?.as_ref().clone())
    }

    /// All cards of one rarity tier (equality match on the `rarity` field).
    pub fn by_rarity(&self, rarity: Rarity) -> Result<Vec<Card>> {
        let catalog = self.backend.catalog()?;
        Ok(catalog
            .iter()
            .filter(|c| c.rarity == rarity)
            .cloned()
            .collect())
    }

    /// The catalog partitioned into per-tier pools.
    pub fn pools(&self) -> Result<CardPools> {
        let catalog = self.backend.catalog()?;
        Ok(CardPools::partition(catalog.iter().cloned()))
    }

    // -- Random sampling ---------------------------------------------------

    /// Return up to `count` randomly-sampled distinct cards.
    pub fn random(&self, count: usize) -> Result<Vec<Card>> {
        let catalog = self.backend.catalog()?;
        let mut rng = thread_rng();
        Ok(catalog
            .choose_multiple(&mut rng, count)
            .cloned()
            .collect())
    }

    // -- Count -------------------------------------------------------------

    /// Number of cards in the catalog.
    pub fn count(&self) -> Result<usize> {
        Ok(self.backend.catalog()?.len())
    }

    // -- Seeding / administration ------------------------------------------

    /// Seed cards into the store, skipping ids that already exist.
    ///
    /// Returns how many cards were written. The catalog snapshot is
    /// invalidated so the next read picks up the additions.
    pub fn seed(&self, cards: &[Card]) -> Result<usize> {
        let store = self.backend.store();
        let mut added = 0;
        for card in cards {
            if store.get(config::CARDS_COLLECTION, &card.id)?.is_some() {
                eprintln!("Card {} already seeded, skipping", card.id);
                continue;
            }
            let doc = json!({
                "name": card.name,
                "rarity": card.rarity,
                "imageURL": card.image_url,
            });
            store.set(config::CARDS_COLLECTION, &card.id, &doc)?;
            added += 1;
        }
        if added > 0 {
            self.backend.reset_catalog();
        }
        Ok(added)
    }

    /// Delete every card from the store and invalidate the snapshot.
    ///
    /// Returns how many cards were removed.
    pub fn delete_all(&self) -> Result<usize> {
        let store = self.backend.store();
        let docs = store.list(config::CARDS_COLLECTION)?;
        let removed = docs.len();
        for (id, _) in docs {
            store.delete(config::CARDS_COLLECTION, &id)?;
        }
        self.backend.reset_catalog();
        Ok(removed)
    }
}
