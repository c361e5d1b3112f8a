//! The memory-match mini-game state machine.
//!
//! Sixteen face-down slots hold eight distinct cards, each duplicated once.
//! The player flips two slots at a time; matching pairs stay revealed,
//! mismatches turn back face down, and every checked pair consumes one move
//! from a fixed budget. The machine is entirely in-memory -- the caller owns
//! the visual reveal delay and persists daily counters separately through
//! [`MinigameQuery`](crate::queries::minigame::MinigameQuery).

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{CampusError, Result};
use crate::models::Card;

/// Distinct cards dealt per game.
pub const PAIR_COUNT: usize = 8;

/// Slots on the board (each dealt card appears twice).
pub const BOARD_SLOTS: usize = PAIR_COUNT * 2;

/// Checked pairs allowed before the game is lost.
pub const MOVE_BUDGET: u32 = 15;

/// Rewarded games allowed per calendar day.
pub const DAILY_REWARD_CAP: u32 = 2;

/// Seconds the client keeps a mismatched pair revealed before the machine's
/// `resolve_pending` step runs. The delay belongs to the caller's timer; the
/// machine only sequences the states around it.
pub const REVEAL_DELAY_SECS: u64 = 2;

// ---------------------------------------------------------------------------
// Board types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Face {
    Down,
    Up,
    Matched,
}

/// One slot on the board.
#[derive(Debug, Clone)]
pub struct BoardSlot {
    /// Slot key unique across the board, including between the two copies
    /// of a pair (`"{card id}-{slot index}"`).
    pub key: String,
    pub card: Card,
    face: Face,
}

impl BoardSlot {
    pub fn is_face_up(&self) -> bool {
        matches!(self.face, Face::Up | Face::Matched)
    }

    pub fn is_matched(&self) -> bool {
        self.face == Face::Matched
    }
}

/// Where the machine currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Ready for the first flip of a pair.
    Ready,
    /// One slot flipped, waiting for its partner.
    OneFlipped(usize),
    /// Two slots flipped; awaiting [`MemoryGame::resolve_pending`].
    Checking(usize, usize),
    Won,
    Lost,
}

/// How a concluded game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Won,
    Lost,
}

/// Result of a flip attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    /// The flip was not accepted: slot already revealed, a pair is being
    /// checked, the index is out of range, or the game is over. State is
    /// unchanged.
    Ignored,
    /// First slot of a pair revealed.
    Flipped,
    /// Second slot revealed; call `resolve_pending` after the reveal delay.
    PairReady,
}

/// Result of resolving a flipped pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveOutcome {
    Matched,
    Mismatched,
}

// ---------------------------------------------------------------------------
// MemoryGame
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct MemoryGame {
    slots: Vec<BoardSlot>,
    phase: Phase,
    moves_left: u32,
}

impl MemoryGame {
    /// Deal a new board from exactly [`PAIR_COUNT`] distinct cards.
    ///
    /// Each card is duplicated once, the sixteen slots are shuffled, and the
    /// move budget is reset to [`MOVE_BUDGET`].
    pub fn deal<R: Rng + ?Sized>(cards: Vec<Card>, rng: &mut R) -> Result<Self> {
        if cards.len() != PAIR_COUNT {
            return Err(CampusError::InvalidArgument(format!(
                "a memory game needs {} distinct cards, got {}",
                PAIR_COUNT,
                cards.len()
            )));
        }
        let distinct: HashSet<&str> = cards.iter().map(|c| c.id.as_str()).collect();
        if distinct.len() != PAIR_COUNT {
            return Err(CampusError::InvalidArgument(
                "memory game cards must have distinct ids".into(),
            ));
        }

        let mut board: Vec<Card> = Vec::with_capacity(BOARD_SLOTS);
        board.extend(cards.iter().cloned());
        board.extend(cards);
        board.shuffle(rng);

        let slots = board
            .into_iter()
            .enumerate()
            .map(|(index, card)| BoardSlot {
                key: format!("{}-{}", card.id, index),
                card,
                face: Face::Down,
            })
            .collect();

        Ok(Self {
            slots,
            phase: Phase::Ready,
            moves_left: MOVE_BUDGET,
        })
    }

    // -- Accessors ---------------------------------------------------------

    pub fn slots(&self) -> &[BoardSlot] {
        &self.slots
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn moves_left(&self) -> u32 {
        self.moves_left
    }

    pub fn matched_slots(&self) -> usize {
        self.slots.iter().filter(|s| s.is_matched()).count()
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Won | Phase::Lost)
    }

    /// The final outcome, once the game has concluded.
    pub fn outcome(&self) -> Option<MatchOutcome> {
        match self.phase {
            Phase::Won => Some(MatchOutcome::Won),
            Phase::Lost => Some(MatchOutcome::Lost),
            _ => None,
        }
    }

    // -- Transitions -------------------------------------------------------

    /// Flip a slot face up.
    ///
    /// Ignored while a pair is being checked, on an already revealed or
    /// matched slot, on an out-of-range index, or after the game has
    /// concluded.
    pub fn flip(&mut self, index: usize) -> FlipOutcome {
        let first = match self.phase {
            Phase::Ready => None,
            Phase::OneFlipped(first) => Some(first),
            Phase::Checking(..) | Phase::Won | Phase::Lost => return FlipOutcome::Ignored,
        };
        let Some(slot) = self.slots.get_mut(index) else {
            return FlipOutcome::Ignored;
        };
        if slot.face != Face::Down {
            return FlipOutcome::Ignored;
        }

        slot.face = Face::Up;
        match first {
            None => {
                self.phase = Phase::OneFlipped(index);
                FlipOutcome::Flipped
            }
            Some(first) => {
                self.phase = Phase::Checking(first, index);
                FlipOutcome::PairReady
            }
        }
    }

    /// Resolve the pair currently being checked.
    ///
    /// Matching slots are marked matched permanently; mismatched slots turn
    /// back face down. One move is consumed either way. The win condition
    /// (all slots matched) is evaluated before the loss condition (move
    /// budget exhausted). Returns `None` when no pair is pending.
    pub fn resolve_pending(&mut self) -> Option<ResolveOutcome> {
        let (a, b) = match self.phase {
            Phase::Checking(a, b) => (a, b),
            _ => return None,
        };

        let matched = self.slots[a].card.id == self.slots[b].card.id;
        let face = if matched { Face::Matched } else { Face::Down };
        self.slots[a].face = face;
        self.slots[b].face = face;

        self.moves_left = self.moves_left.saturating_sub(1);

        if matched && self.slots.iter().all(|s| s.is_matched()) {
            self.phase = Phase::Won;
        } else if self.moves_left == 0 {
            self.phase = Phase::Lost;
        } else {
            self.phase = Phase::Ready;
        }

        Some(if matched {
            ResolveOutcome::Matched
        } else {
            ResolveOutcome::Mismatched
        })
    }
}
