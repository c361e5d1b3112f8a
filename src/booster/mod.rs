//! Booster pack generation.

pub mod generator;

pub use generator::{generate, legacy_pack, Band, BandTable, PACK_SIZE};
