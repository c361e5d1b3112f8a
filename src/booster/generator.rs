//! Weighted booster generation.
//!
//! A pack is produced by one uniform draw in [0, 1) against a band table: a
//! contiguous partition of the unit interval where each band fixes a
//! composition (how many cards of each rarity tier the pack contains). The
//! cards for each tier are then drawn uniformly without replacement from
//! that tier's pool.
//!
//! Generation is pure over the supplied pools and random source, so
//! distribution tests can run deterministically with a seeded generator.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{CampusError, Result};
use crate::models::{Card, CardPools, Rarity};

/// Every booster holds exactly this many cards.
pub const PACK_SIZE: usize = 6;

// ---------------------------------------------------------------------------
// Band / BandTable
// ---------------------------------------------------------------------------

/// One slice of the unit interval and the pack composition it produces.
#[derive(Debug, Clone)]
pub struct Band {
    width: f64,
    composition: Vec<(Rarity, usize)>,
}

impl Band {
    pub fn new(width: f64, composition: Vec<(Rarity, usize)>) -> Self {
        Self { width, composition }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn composition(&self) -> &[(Rarity, usize)] {
        &self.composition
    }
}

/// An ordered partition of [0, 1) into composition bands.
///
/// The band layout is a policy value, not a hard contract: game balance
/// lives in the table the caller supplies. [`BandTable::default`] is the
/// canonical production table.
#[derive(Debug, Clone)]
pub struct BandTable {
    bands: Vec<Band>,
}

impl BandTable {
    /// Validate and build a band table.
    ///
    /// Requires: at least one band, every width positive, widths summing to
    /// 1.0 (within floating-point tolerance), and every composition totaling
    /// exactly [`PACK_SIZE`] cards.
    pub fn new(bands: Vec<Band>) -> Result<Self> {
        if bands.is_empty() {
            return Err(CampusError::InvalidArgument(
                "band table must contain at least one band".into(),
            ));
        }
        for band in &bands {
            if band.width <= 0.0 {
                return Err(CampusError::InvalidArgument(format!(
                    "band width must be positive, got {}",
                    band.width
                )));
            }
            let total: usize = band.composition.iter().map(|(_, n)| n).sum();
            if total != PACK_SIZE {
                return Err(CampusError::InvalidArgument(format!(
                    "band composition totals {} cards, expected {}",
                    total, PACK_SIZE
                )));
            }
        }
        let sum: f64 = bands.iter().map(|b| b.width).sum();
        if (sum - 1.0).abs() > 1e-9 {
            return Err(CampusError::InvalidArgument(format!(
                "band widths must partition the unit interval, got sum {}",
                sum
            )));
        }
        Ok(Self { bands })
    }

    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    /// The band containing `roll` (a value in [0, 1)).
    ///
    /// Rolls beyond the accumulated widths (possible only through
    /// floating-point rounding at the very top of the interval) land in the
    /// final band.
    fn band_for(&self, roll: f64) -> &Band {
        let mut cumulative = 0.0;
        for band in &self.bands {
            cumulative += band.width;
            if roll < cumulative {
                return band;
            }
        }
        // Unreachable for roll in [0, 1) with a valid table, modulo rounding.
        &self.bands[self.bands.len() - 1]
    }
}

impl Default for BandTable {
    /// The canonical production table.
    ///
    /// | width | composition                        |
    /// |-------|------------------------------------|
    /// | 0.60  | 5 common + 1 shiny                 |
    /// | 0.25  | 4 common + 2 shiny                 |
    /// | 0.05  | 6 shiny                            |
    /// | 0.04  | 5 common + 1 super-rare            |
    /// | 0.03  | 4 common + 1 shiny + 1 super-rare  |
    /// | 0.02  | 5 common + 1 secret                |
    /// | 0.01  | 4 common + 1 super-rare + 1 secret |
    fn default() -> Self {
        use Rarity::*;
        Self::new(vec![
            Band::new(0.60, vec![(Common, 5), (Shiny, 1)]),
            Band::new(0.25, vec![(Common, 4), (Shiny, 2)]),
            Band::new(0.05, vec![(Shiny, 6)]),
            Band::new(0.04, vec![(Common, 5), (SuperRare, 1)]),
            Band::new(0.03, vec![(Common, 4), (Shiny, 1), (SuperRare, 1)]),
            Band::new(0.02, vec![(Common, 5), (Secret, 1)]),
            Band::new(0.01, vec![(Common, 4), (SuperRare, 1), (Secret, 1)]),
        ])
        .expect("canonical band table is valid")
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Generate one booster pack from the given pools.
///
/// Draws a band from `table`, then fills the pack tier by tier. Each tier
/// draw selects distinct cards uniformly without replacement from that
/// tier's pool; a pool smaller than its required draw count fails with
/// [`CampusError::PoolExhausted`] and no cards are returned.
pub fn generate<R: Rng + ?Sized>(
    table: &BandTable,
    pools: &CardPools,
    rng: &mut R,
) -> Result<Vec<Card>> {
    let roll: f64 = rng.gen();
    let band = table.band_for(roll);

    let mut pack = Vec::with_capacity(PACK_SIZE);
    for &(rarity, count) in band.composition() {
        pack.extend(draw_distinct(pools.tier(rarity), rarity, count, rng)?);
    }
    Ok(pack)
}

/// Generate the legacy rarity-blind pack: [`PACK_SIZE`] distinct cards
/// drawn uniformly from the whole catalog.
pub fn legacy_pack<R: Rng + ?Sized>(catalog: &[Card], rng: &mut R) -> Result<Vec<Card>> {
    if catalog.len() < PACK_SIZE {
        return Err(CampusError::InvalidArgument(format!(
            "catalog holds {} cards; a pack needs {}",
            catalog.len(),
            PACK_SIZE
        )));
    }
    Ok(catalog
        .choose_multiple(rng, PACK_SIZE)
        .cloned()
        .collect())
}

/// Draw `count` distinct cards uniformly from one tier's pool.
fn draw_distinct<R: Rng + ?Sized>(
    pool: &[Card],
    rarity: Rarity,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Card>> {
    if pool.len() < count {
        return Err(CampusError::PoolExhausted {
            rarity,
            needed: count,
            available: pool.len(),
        });
    }
    Ok(pool.choose_multiple(rng, count).cloned().collect())
}
