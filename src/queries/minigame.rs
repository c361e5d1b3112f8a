//! Memory mini-game sessions: dealing boards, the daily counter reset, and
//! the end-of-game reward grant.

use chrono::NaiveDateTime;
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};
use serde::Serialize;
use serde_json::json;

use crate::error::{CampusError, Result};
use crate::memory::{MatchOutcome, MemoryGame, DAILY_REWARD_CAP, PAIR_COUNT};
use crate::models::Card;

// ---------------------------------------------------------------------------
// RewardOutcome
// ---------------------------------------------------------------------------

/// What a concluded game did to the user's record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardOutcome {
    /// Whether a booster was granted for this game.
    pub booster_granted: bool,
    /// Games concluded today, after this one.
    pub daily_games: u32,
    /// Booster balance after this game.
    pub booster_count: u32,
}

// ---------------------------------------------------------------------------
// MinigameQuery
// ---------------------------------------------------------------------------

/// Runs the persistence side of memory-game sessions.
///
/// The state machine itself ([`MemoryGame`]) is pure and caller-owned; this
/// interface covers the two points that touch the user's record -- the
/// start-of-day counter reset and the end-of-game reward grant.
pub struct MinigameQuery<'a> {
    backend: &'a crate::backend::Backend,
}

impl<'a> MinigameQuery<'a> {
    /// Create a new `MinigameQuery` bound to the given backend.
    pub fn new(backend: &'a crate::backend::Backend) -> Self {
        Self { backend }
    }

    // -- Dealing -----------------------------------------------------------

    /// Deal a board from eight random catalog cards, with no persistence.
    pub fn deal(&self) -> Result<MemoryGame> {
        self.deal_with(&mut thread_rng())
    }

    /// [`deal`](Self::deal) with a caller-supplied random source.
    pub fn deal_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<MemoryGame> {
        let catalog = self.backend.catalog()?;
        if catalog.len() < PAIR_COUNT {
            return Err(CampusError::InvalidArgument(format!(
                "catalog holds {} cards; a memory game needs {}",
                catalog.len(),
                PAIR_COUNT
            )));
        }
        let cards: Vec<Card> = catalog.choose_multiple(rng, PAIR_COUNT).cloned().collect();
        MemoryGame::deal(cards, rng)
    }

    // -- Session lifecycle -------------------------------------------------

    /// Start a session for a user at `now`.
    ///
    /// Resets the daily counters when the stored last-played timestamp
    /// falls on a different calendar day than `now` (date comparison, not a
    /// rolling 24-hour window), stamps the record with `now`, and deals a
    /// fresh board.
    pub fn start_session(&self, user_id: &str, now: NaiveDateTime) -> Result<MemoryGame> {
        self.start_session_with(user_id, now, &mut thread_rng())
    }

    /// [`start_session`](Self::start_session) with a caller-supplied random
    /// source.
    pub fn start_session_with<R: Rng + ?Sized>(
        &self,
        user_id: &str,
        now: NaiveDateTime,
        rng: &mut R,
    ) -> Result<MemoryGame> {
        let user = self.backend.user(user_id)?;

        let new_day = match user.last_played_at {
            Some(last) => last.date() != now.date(),
            None => true,
        };
        let fields = if new_day {
            json!({
                "dailyGames": 0,
                "dailyBoosters": 0,
                "lastPlayedAt": now,
            })
        } else {
            json!({ "lastPlayedAt": now })
        };
        self.backend.merge_user(user_id, fields)?;

        self.deal_with(rng)
    }

    /// Record a concluded game and apply the reward policy.
    ///
    /// The daily games counter increments on every concluded game, won or
    /// lost. A win grants one booster only while the pre-increment counter
    /// is below [`DAILY_REWARD_CAP`].
    pub fn finish_session(
        &self,
        user_id: &str,
        outcome: MatchOutcome,
        now: NaiveDateTime,
    ) -> Result<RewardOutcome> {
        let user = self.backend.user(user_id)?;

        let granted = outcome == MatchOutcome::Won && user.daily_games < DAILY_REWARD_CAP;
        let daily_games = user.daily_games + 1;
        let booster_count = if granted {
            user.booster_count + 1
        } else {
            user.booster_count
        };

        let mut fields = json!({
            "dailyGames": daily_games,
            "lastPlayedAt": now,
        });
        if granted {
            fields["boosterCount"] = json!(booster_count);
            fields["dailyBoosters"] = json!(user.daily_boosters + 1);
        }
        self.backend.merge_user(user_id, fields)?;

        Ok(RewardOutcome {
            booster_granted: granted,
            daily_games,
            booster_count,
        })
    }
}
