//! Pack opening: weighted generation committed to the user's collection.

use rand::thread_rng;
use rand::Rng;
use serde_json::json;

use crate::booster::{self, BandTable};
use crate::error::{CampusError, Result};
use crate::models::{Card, CardPools};

// ---------------------------------------------------------------------------
// BoosterQuery
// ---------------------------------------------------------------------------

/// Opens booster packs against the catalog and the user's record.
///
/// Uses the canonical band table unless overridden with
/// [`with_table`](Self::with_table).
pub struct BoosterQuery<'a> {
    backend: &'a crate::backend::Backend,
    table: BandTable,
}

impl<'a> BoosterQuery<'a> {
    /// Create a new `BoosterQuery` bound to the given backend.
    pub fn new(backend: &'a crate::backend::Backend) -> Self {
        Self {
            backend,
            table: BandTable::default(),
        }
    }

    /// Use a custom band table instead of the canonical one.
    pub fn with_table(mut self, table: BandTable) -> Self {
        self.table = table;
        self
    }

    /// The band table in effect.
    pub fn table(&self) -> &BandTable {
        &self.table
    }

    // -- Committed opening -------------------------------------------------

    /// Open one pack for a user and commit the result.
    ///
    /// Rejects with [`CampusError::OutOfBoosters`] when the balance is zero.
    /// On success the owned-card quantities and the decremented balance are
    /// persisted in a single merged write, so a failed generation (for
    /// example an exhausted tier pool) or a failed write leaves the user's
    /// record untouched.
    pub fn open_pack(&self, user_id: &str) -> Result<Vec<Card>> {
        self.open_pack_with(user_id, &mut thread_rng())
    }

    /// [`open_pack`](Self::open_pack) with a caller-supplied random source.
    pub fn open_pack_with<R: Rng + ?Sized>(
        &self,
        user_id: &str,
        rng: &mut R,
    ) -> Result<Vec<Card>> {
        let mut user = self.backend.user(user_id)?;
        if user.booster_count == 0 {
            return Err(CampusError::OutOfBoosters);
        }

        let pack = self.preview_with(rng)?;

        for card in &pack {
            *user.cards.entry(card.id.clone()).or_insert(0) += 1;
        }
        self.backend.merge_user(
            user_id,
            json!({
                "cards": user.cards,
                "boosterCount": user.booster_count - 1,
            }),
        )?;

        Ok(pack)
    }

    // -- Uncommitted generation --------------------------------------------

    /// Generate a pack without touching any user record.
    pub fn preview(&self) -> Result<Vec<Card>> {
        self.preview_with(&mut thread_rng())
    }

    /// [`preview`](Self::preview) with a caller-supplied random source.
    pub fn preview_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<Card>> {
        let catalog = self.backend.catalog()?;
        let pools = CardPools::partition(catalog.iter().cloned());
        booster::generate(&self.table, &pools, rng)
    }

    /// The legacy rarity-blind pack: six distinct cards drawn uniformly
    /// from the whole catalog, with no balance check and no commit.
    pub fn legacy_pack(&self) -> Result<Vec<Card>> {
        let catalog = self.backend.catalog()?;
        booster::legacy_pack(&catalog, &mut thread_rng())
    }
}
