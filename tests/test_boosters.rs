//! Pack-opening query tests: balance enforcement, commit semantics, and the
//! legacy pack.

mod common;

use campus_tcg_sdk::booster::PACK_SIZE;
use campus_tcg_sdk::error::CampusError;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ---------------------------------------------------------------------------
// open_pack
// ---------------------------------------------------------------------------

#[test]
fn open_pack_with_zero_balance_is_rejected_without_mutation() {
    let (sdk, _tmp) = common::setup_sample_sdk();

    let before = sdk.collections().get("user-bob").unwrap();
    assert_eq!(before.booster_count, 0);

    let err = sdk.boosters().open_pack("user-bob").unwrap_err();
    assert!(matches!(err, CampusError::OutOfBoosters));

    let after = sdk.collections().get("user-bob").unwrap();
    assert_eq!(after, before);
}

#[test]
fn open_pack_decrements_balance_and_adds_six_cards() {
    let (sdk, _tmp) = common::setup_sample_sdk();
    let mut rng = StdRng::seed_from_u64(21);

    let before = sdk.collections().get("user-alice").unwrap();
    let owned_before: u64 = before.total_cards();

    let pack = sdk.boosters().open_pack_with("user-alice", &mut rng).unwrap();
    assert_eq!(pack.len(), PACK_SIZE);

    let after = sdk.collections().get("user-alice").unwrap();
    assert_eq!(after.booster_count, before.booster_count - 1);
    assert_eq!(after.total_cards(), owned_before + PACK_SIZE as u64);

    // Every card in the pack is reflected in the owned quantities.
    for card in &pack {
        assert!(after.cards.get(&card.id).copied().unwrap_or(0) >= 1);
    }
}

#[test]
fn open_pack_never_drives_balance_negative() {
    let (sdk, _tmp) = common::setup_sample_sdk();
    let mut rng = StdRng::seed_from_u64(22);

    // Alice has 3 boosters: three opens succeed, the fourth is rejected.
    for _ in 0..3 {
        sdk.boosters().open_pack_with("user-alice", &mut rng).unwrap();
    }
    let err = sdk
        .boosters()
        .open_pack_with("user-alice", &mut rng)
        .unwrap_err();
    assert!(matches!(err, CampusError::OutOfBoosters));

    let record = sdk.collections().get("user-alice").unwrap();
    assert_eq!(record.booster_count, 0);
}

#[test]
fn open_pack_quantities_only_increase() {
    let (sdk, _tmp) = common::setup_sample_sdk();
    let mut rng = StdRng::seed_from_u64(23);

    let before = sdk.collections().get("user-alice").unwrap();
    sdk.boosters().open_pack_with("user-alice", &mut rng).unwrap();
    let after = sdk.collections().get("user-alice").unwrap();

    for (id, qty) in &before.cards {
        assert!(after.cards.get(id).copied().unwrap_or(0) >= *qty);
    }
}

// ---------------------------------------------------------------------------
// preview / legacy_pack
// ---------------------------------------------------------------------------

#[test]
fn preview_does_not_touch_user_records() {
    let (sdk, _tmp) = common::setup_sample_sdk();
    let mut rng = StdRng::seed_from_u64(24);

    let before = sdk.collections().get("user-alice").unwrap();
    let pack = sdk.boosters().preview_with(&mut rng).unwrap();
    assert_eq!(pack.len(), PACK_SIZE);
    assert_eq!(sdk.collections().get("user-alice").unwrap(), before);
}

#[test]
fn legacy_pack_returns_six_distinct_catalog_cards() {
    let (sdk, _tmp) = common::setup_sample_sdk();

    let pack = sdk.boosters().legacy_pack().unwrap();
    assert_eq!(pack.len(), PACK_SIZE);

    let mut ids: Vec<&str> = pack.iter().map(|c| c.id.as_str()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), PACK_SIZE);

    let catalog_count = sdk.cards().count().unwrap();
    assert!(catalog_count >= PACK_SIZE);
}
