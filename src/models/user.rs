use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// UserCollection — the per-user document in the `collections` collection
// ---------------------------------------------------------------------------

/// A user's collection record.
///
/// Every field is default-filled when absent from the stored document, so a
/// freshly created (or partially written) record deserializes into a usable
/// value instead of failing at the store boundary. Timestamps are naive
/// local datetimes serialized as ISO-8601 strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct UserCollection {
    /// Owned cards: card id -> quantity. Quantities only ever increase
    /// through normal play.
    pub cards: HashMap<String, u32>,

    /// Unopened booster balance. Never negative; operations that would
    /// drive it below zero are rejected before any write.
    pub booster_count: u32,

    /// When the user last collected a free scheduled booster.
    pub last_booster_at: Option<NaiveDateTime>,

    /// When the user last started a memory game. Drives the daily counter
    /// reset (calendar-day comparison, not a rolling window).
    pub last_played_at: Option<NaiveDateTime>,

    /// Memory games concluded today (won or lost).
    pub daily_games: u32,

    /// Boosters earned from the memory game today.
    pub daily_boosters: u32,

    /// Display name shown on the leaderboard.
    pub player_name: String,

    /// Manual gate for the whole application beyond the maintenance page.
    pub is_whitelisted: bool,
}

impl UserCollection {
    /// Number of distinct cards owned (zero-quantity entries excluded).
    pub fn unique_cards(&self) -> usize {
        self.cards.values().filter(|&&n| n > 0).count()
    }

    /// Total cards owned across all duplicates.
    pub fn total_cards(&self) -> u64 {
        self.cards.values().map(|&n| u64::from(n)).sum()
    }
}

// ---------------------------------------------------------------------------
// LeaderboardEntry
// ---------------------------------------------------------------------------

/// One row of the leaderboard: players ranked by distinct cards owned,
/// ties broken by total cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub player_name: String,
    pub unique_cards: usize,
    pub total_cards: u64,
}
