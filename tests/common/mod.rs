//! Shared test fixtures for the Campus TCG SDK integration tests.
//!
//! Provides `setup_sample_sdk()` which creates a [`CampusSdk`] over an
//! in-memory document store seeded with a small card catalog (all four
//! rarity tiers) and a couple of user records.

#![allow(dead_code)]

use campus_tcg_sdk::store::{DocumentStore, MemoryStore};
use campus_tcg_sdk::CampusSdk;
use serde_json::json;

/// Create a `CampusSdk` backed by a seeded in-memory store and a temporary
/// catalog cache directory.
///
/// Returns `(CampusSdk, tempfile::TempDir)`. The caller must keep the
/// `TempDir` alive for the duration of the test so the cache directory is
/// not deleted prematurely.
pub fn setup_sample_sdk() -> (CampusSdk, tempfile::TempDir) {
    let tmp_dir = tempfile::tempdir().unwrap();
    let store = MemoryStore::new();

    seed_cards(&store);
    seed_users(&store);

    let sdk = CampusSdk::builder()
        .store(Box::new(store))
        .cache_dir(tmp_dir.path())
        .build()
        .unwrap();

    (sdk, tmp_dir)
}

/// Seed the sample catalog: 8 commons, 8 shinies, 3 super-rares, 2 secrets.
pub fn seed_cards(store: &dyn DocumentStore) {
    for (id, name, rarity) in sample_card_rows() {
        let doc = json!({
            "name": name,
            "rarity": rarity,
            "imageURL": format!("https://cards.example/{}.png", id),
        });
        store.set("cards", id, &doc).unwrap();
    }
}

/// Seed two user records.
///
/// - `user-alice`: 3 boosters, a few cards, whitelisted.
/// - `user-bob`: empty balance, no cards.
pub fn seed_users(store: &dyn DocumentStore) {
    store
        .set(
            "collections",
            "user-alice",
            &json!({
                "cards": { "c01": 2, "s01": 1 },
                "boosterCount": 3,
                "playerName": "Alice",
                "isWhitelisted": true,
            }),
        )
        .unwrap();

    store
        .set(
            "collections",
            "user-bob",
            &json!({
                "boosterCount": 0,
                "playerName": "Bob",
            }),
        )
        .unwrap();
}

/// The raw rows behind [`seed_cards`], usable directly by pure-module tests.
pub fn sample_card_rows() -> Vec<(&'static str, &'static str, &'static str)> {
    vec![
        ("c01", "Groundskeeper Wren", "common"),
        ("c02", "Cafeteria Golem", "common"),
        ("c03", "Hall Monitor", "common"),
        ("c04", "Chalkboard Wraith", "common"),
        ("c05", "Locker Mimic", "common"),
        ("c06", "Pop Quiz Imp", "common"),
        ("c07", "Gymnasium Ogre", "common"),
        ("c08", "Library Sprite", "common"),
        ("s01", "Groundskeeper Wren", "shiny"),
        ("s02", "Cafeteria Golem", "shiny"),
        ("s03", "Hall Monitor", "shiny"),
        ("s04", "Chalkboard Wraith", "shiny"),
        ("s05", "Locker Mimic", "shiny"),
        ("s06", "Pop Quiz Imp", "shiny"),
        ("s07", "Gymnasium Ogre", "shiny"),
        ("s08", "Library Sprite", "shiny"),
        ("r01", "Headmaster Aldous", "superRare"),
        ("r02", "The Substitute", "superRare"),
        ("r03", "Detention Warden", "superRare"),
        ("x01", "The Founder", "secret"),
        ("x02", "Graduation Phoenix", "secret"),
    ]
}

/// Typed sample cards for tests that exercise the pure modules directly.
pub fn sample_cards() -> Vec<campus_tcg_sdk::models::Card> {
    sample_card_rows()
        .into_iter()
        .map(|(id, name, rarity)| campus_tcg_sdk::models::Card {
            id: id.to_string(),
            name: name.to_string(),
            rarity: rarity.parse().unwrap(),
            image_url: format!("https://cards.example/{}.png", id),
        })
        .collect()
}
