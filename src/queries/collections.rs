//! User collection queries: typed reads, balance updates, whitelist checks,
//! and the leaderboard.

use serde_json::json;

use crate::error::Result;
use crate::models::{LeaderboardEntry, UserCollection};

/// Display name used on the leaderboard for users who never set one.
const UNKNOWN_PLAYER: &str = "Unknown Player";

// ---------------------------------------------------------------------------
// CollectionQuery
// ---------------------------------------------------------------------------

/// Query interface for per-user collection records.
pub struct CollectionQuery<'a> {
    backend: &'a crate::backend::Backend,
}

impl<'a> CollectionQuery<'a> {
    /// Create a new `CollectionQuery` bound to the given backend.
    pub fn new(backend: &'a crate::backend::Backend) -> Self {
        Self { backend }
    }

    // -- Record access -----------------------------------------------------

    /// A user's collection record, default-filled when absent.
    pub fn get(&self, user_id: &str) -> Result<UserCollection> {
        self.backend.user(user_id)
    }

    /// Replace a user's record wholesale.
    pub fn save(&self, user_id: &str, record: &UserCollection) -> Result<()> {
        self.backend.save_user(user_id, record)
    }

    // -- Scalar field updates ----------------------------------------------

    /// Set the booster balance to an absolute value.
    pub fn set_booster_count(&self, user_id: &str, count: u32) -> Result<()> {
        self.backend
            .merge_user(user_id, json!({ "boosterCount": count }))
    }

    /// Set the display name shown on the leaderboard.
    pub fn set_player_name(&self, user_id: &str, name: &str) -> Result<()> {
        self.backend
            .merge_user(user_id, json!({ "playerName": name }))
    }

    /// Whether the user has been manually admitted past the maintenance
    /// page. Unknown users are not whitelisted.
    pub fn is_whitelisted(&self, user_id: &str) -> Result<bool> {
        Ok(self.backend.user(user_id)?.is_whitelisted)
    }

    /// Flip the whitelist gate for a user.
    pub fn set_whitelisted(&self, user_id: &str, whitelisted: bool) -> Result<()> {
        self.backend
            .merge_user(user_id, json!({ "isWhitelisted": whitelisted }))
    }

    // -- Leaderboard -------------------------------------------------------

    /// All players ranked by distinct cards owned, ties broken by total
    /// cards owned.
    pub fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>> {
        let users = self.backend.users()?;

        let mut entries: Vec<LeaderboardEntry> = users
            .into_iter()
            .map(|(_, record)| LeaderboardEntry {
                player_name: if record.player_name.is_empty() {
                    UNKNOWN_PLAYER.to_string()
                } else {
                    record.player_name.clone()
                },
                unique_cards: record.unique_cards(),
                total_cards: record.total_cards(),
            })
            .collect();

        entries.sort_by(|a, b| {
            b.unique_cards
                .cmp(&a.unique_cards)
                .then(b.total_cards.cmp(&a.total_cards))
        });

        Ok(entries)
    }
}
