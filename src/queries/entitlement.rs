//! Free-booster entitlement: availability checks and the collect action.

use chrono::NaiveDateTime;
use serde_json::json;

use crate::entitlement::{check_availability, Availability, Schedule};
use crate::error::{CampusError, Result};

// ---------------------------------------------------------------------------
// EntitlementQuery
// ---------------------------------------------------------------------------

/// Evaluates and applies the free-booster schedule for a user.
///
/// Uses the production schedule (04:00 / 12:00 / 20:00) unless overridden
/// with [`with_schedule`](Self::with_schedule).
pub struct EntitlementQuery<'a> {
    backend: &'a crate::backend::Backend,
    schedule: Schedule,
}

impl<'a> EntitlementQuery<'a> {
    /// Create a new `EntitlementQuery` bound to the given backend.
    pub fn new(backend: &'a crate::backend::Backend) -> Self {
        Self {
            backend,
            schedule: Schedule::default(),
        }
    }

    /// Use a custom schedule instead of the production one.
    pub fn with_schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// The schedule in effect.
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Whether the user can collect a free booster at `now`, and when the
    /// next slot opens.
    pub fn availability(&self, user_id: &str, now: NaiveDateTime) -> Result<Availability> {
        let user = self.backend.user(user_id)?;
        Ok(check_availability(user.last_booster_at, now, &self.schedule))
    }

    /// Collect the free booster for the current slot.
    ///
    /// Rejects with [`CampusError::NotYetCollectible`] when no slot has
    /// elapsed since the last collection. On success the incremented
    /// balance and the collection timestamp are persisted in a single
    /// merged write: if the write fails, neither field lands and the user
    /// stays collectible instead of being locked out. Returns the
    /// post-collection availability.
    pub fn collect(&self, user_id: &str, now: NaiveDateTime) -> Result<Availability> {
        let user = self.backend.user(user_id)?;
        let availability = check_availability(user.last_booster_at, now, &self.schedule);
        if !availability.can_collect {
            return Err(CampusError::NotYetCollectible {
                next_at: availability.next_at,
            });
        }

        self.backend.merge_user(
            user_id,
            json!({
                "boosterCount": user.booster_count + 1,
                "lastBoosterAt": now,
            }),
        )?;

        Ok(check_availability(Some(now), now, &self.schedule))
    }
}
