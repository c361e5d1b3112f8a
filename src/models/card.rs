use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CampusError;

// ---------------------------------------------------------------------------
// Rarity
// ---------------------------------------------------------------------------

/// Rarity tier of a card, in ascending order of scarcity.
///
/// The tier decides both the drop weight in booster generation and the
/// display treatment in the web client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Rarity {
    Common,
    Shiny,
    SuperRare,
    Secret,
}

impl Rarity {
    /// All tiers, ascending by scarcity.
    pub const ALL: [Rarity; 4] = [
        Rarity::Common,
        Rarity::Shiny,
        Rarity::SuperRare,
        Rarity::Secret,
    ];

    /// The wire name of the tier (matches the stored `rarity` field).
    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Shiny => "shiny",
            Rarity::SuperRare => "superRare",
            Rarity::Secret => "secret",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rarity {
    type Err = CampusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "common" => Ok(Rarity::Common),
            "shiny" => Ok(Rarity::Shiny),
            "superRare" => Ok(Rarity::SuperRare),
            "secret" => Ok(Rarity::Secret),
            other => Err(CampusError::InvalidArgument(format!(
                "unknown rarity '{}'",
                other
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Card
// ---------------------------------------------------------------------------

/// A card in the catalog. Immutable reference data: seeded once through the
/// admin operations, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Document id in the `cards` collection.
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub rarity: Rarity,
    #[serde(rename = "imageURL", default)]
    pub image_url: String,
}

// ---------------------------------------------------------------------------
// CardPools
// ---------------------------------------------------------------------------

/// The full catalog partitioned by rarity tier.
///
/// Built from a catalog snapshot and treated as read-only for the duration
/// of one booster generation or one memory-game deal.
#[derive(Debug, Clone, Default)]
pub struct CardPools {
    pub common: Vec<Card>,
    pub shiny: Vec<Card>,
    pub super_rare: Vec<Card>,
    pub secret: Vec<Card>,
}

impl CardPools {
    /// Partition an iterator of cards into per-tier pools.
    pub fn partition<I: IntoIterator<Item = Card>>(cards: I) -> Self {
        let mut pools = CardPools::default();
        for card in cards {
            match card.rarity {
                Rarity::Common => pools.common.push(card),
                Rarity::Shiny => pools.shiny.push(card),
                Rarity::SuperRare => pools.super_rare.push(card),
                Rarity::Secret => pools.secret.push(card),
            }
        }
        pools
    }

    /// Borrow the pool for a single tier.
    pub fn tier(&self, rarity: Rarity) -> &[Card] {
        match rarity {
            Rarity::Common => &self.common,
            Rarity::Shiny => &self.shiny,
            Rarity::SuperRare => &self.super_rare,
            Rarity::Secret => &self.secret,
        }
    }

    /// Total number of cards across all tiers.
    pub fn total(&self) -> usize {
        self.common.len() + self.shiny.len() + self.super_rare.len() + self.secret.len()
    }
}
