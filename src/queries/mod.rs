//! Query modules for the Campus TCG SDK.
//!
//! Each module provides a query struct that borrows from a
//! [`Backend`](crate::backend::Backend) and exposes methods returning
//! `Result<T>` with typed domain values.

pub mod boosters;
pub mod cards;
pub mod collections;
pub mod entitlement;
pub mod minigame;

pub use boosters::BoosterQuery;
pub use cards::CardQuery;
pub use collections::CollectionQuery;
pub use entitlement::EntitlementQuery;
pub use minigame::{MinigameQuery, RewardOutcome};
