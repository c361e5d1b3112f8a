//! The free-booster entitlement clock.
//!
//! Free boosters unlock on a fixed daily schedule of times-of-day. A user
//! becomes eligible once per elapsed schedule slot -- collecting right after
//! slot N does not block collecting again once slot N+1 passes, regardless
//! of the wall-clock interval between them.

use chrono::{Duration, NaiveDateTime, NaiveTime};

use crate::error::{CampusError, Result};

// ---------------------------------------------------------------------------
// Schedule
// ---------------------------------------------------------------------------

/// A fixed, ordered list of daily collection times (local time).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    slots: Vec<NaiveTime>,
}

impl Schedule {
    /// Build a schedule from the given times-of-day.
    ///
    /// Slots are sorted and de-duplicated; an empty schedule is rejected.
    pub fn new(mut slots: Vec<NaiveTime>) -> Result<Self> {
        if slots.is_empty() {
            return Err(CampusError::InvalidArgument(
                "schedule needs at least one slot".into(),
            ));
        }
        slots.sort();
        slots.dedup();
        Ok(Self { slots })
    }

    pub fn slots(&self) -> &[NaiveTime] {
        &self.slots
    }

    fn first(&self) -> NaiveTime {
        self.slots[0]
    }

    fn last(&self) -> NaiveTime {
        self.slots[self.slots.len() - 1]
    }
}

impl Default for Schedule {
    /// The production schedule: 04:00, 12:00, and 20:00 local time.
    fn default() -> Self {
        let slots = [(4, 0), (12, 0), (20, 0)]
            .iter()
            .filter_map(|&(h, m)| NaiveTime::from_hms_opt(h, m, 0))
            .collect();
        Self::new(slots).expect("default schedule is valid")
    }
}

// ---------------------------------------------------------------------------
// Availability
// ---------------------------------------------------------------------------

/// Whether a free booster can be collected now, and when the next slot
/// opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Availability {
    pub can_collect: bool,
    pub next_at: NaiveDateTime,
}

/// Evaluate entitlement at `now` for a user who last collected at
/// `last_collected` (`None` for never).
///
/// `next_at` is the earliest slot strictly after `now`, wrapping to the
/// first slot of the following day once all of today's slots have passed.
/// Collection is allowed when the user has never collected, or collected
/// before the most recent slot. A `now` exactly on a slot boundary counts
/// that slot as passed.
///
/// Pure and idempotent: no hidden state, same inputs always give the same
/// answer.
pub fn check_availability(
    last_collected: Option<NaiveDateTime>,
    now: NaiveDateTime,
    schedule: &Schedule,
) -> Availability {
    let today = now.date();

    let next_at = schedule
        .slots()
        .iter()
        .map(|&t| today.and_time(t))
        .find(|&slot| slot > now)
        .unwrap_or_else(|| (today + Duration::days(1)).and_time(schedule.first()));

    let last_slot = schedule
        .slots()
        .iter()
        .rev()
        .map(|&t| today.and_time(t))
        .find(|&slot| slot <= now)
        .unwrap_or_else(|| (today - Duration::days(1)).and_time(schedule.last()));

    let can_collect = match last_collected {
        None => true,
        Some(collected) => collected < last_slot,
    };

    Availability {
        can_collect,
        next_at,
    }
}
