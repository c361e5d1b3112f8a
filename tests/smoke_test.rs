//! End-to-end smoke test for the Campus TCG SDK.
//!
//! Walks a full player session against an in-memory store: seed the
//! catalog, collect the free booster, open a pack, play the memory game to
//! a win, and check the leaderboard.

mod common;

use campus_tcg_sdk::booster::PACK_SIZE;
use campus_tcg_sdk::memory::{MatchOutcome, Phase, ResolveOutcome};
use chrono::{NaiveDate, NaiveDateTime};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn morning() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 10)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap()
}

#[test]
fn full_player_session() {
    let (sdk, _tmp) = common::setup_sample_sdk();
    let user = "user-eve";
    let now = morning();
    let mut rng = StdRng::seed_from_u64(99);

    // A brand-new player has nothing.
    let fresh = sdk.collections().get(user).unwrap();
    assert_eq!(fresh.booster_count, 0);
    assert!(fresh.cards.is_empty());

    // With no boosters, opening a pack is rejected and nothing changes.
    assert!(sdk.boosters().open_pack_with(user, &mut rng).is_err());
    assert_eq!(sdk.collections().get(user).unwrap(), fresh);

    // The 04:00 slot has passed, so the free booster is collectible.
    let availability = sdk.entitlement().availability(user, now).unwrap();
    assert!(availability.can_collect);
    sdk.entitlement().collect(user, now).unwrap();
    assert_eq!(sdk.collections().get(user).unwrap().booster_count, 1);

    // Open the pack and reveal six cards.
    let pack = sdk.boosters().open_pack_with(user, &mut rng).unwrap();
    assert_eq!(pack.len(), PACK_SIZE);
    let record = sdk.collections().get(user).unwrap();
    assert_eq!(record.booster_count, 0);
    assert_eq!(record.total_cards(), PACK_SIZE as u64);

    // Win a memory game by matching every pair.
    let mut game = sdk.minigame().start_session_with(user, now, &mut rng).unwrap();
    while game.phase() != Phase::Won {
        let slots = game.slots();
        let (a, b) = {
            let mut found = None;
            'outer: for i in 0..slots.len() {
                for j in (i + 1)..slots.len() {
                    if !slots[i].is_face_up()
                        && !slots[j].is_face_up()
                        && slots[i].card.id == slots[j].card.id
                    {
                        found = Some((i, j));
                        break 'outer;
                    }
                }
            }
            found.expect("a face-down pair remains")
        };
        game.flip(a);
        game.flip(b);
        assert_eq!(game.resolve_pending(), Some(ResolveOutcome::Matched));
    }

    let outcome = sdk
        .minigame()
        .finish_session(user, MatchOutcome::Won, now)
        .unwrap();
    assert!(outcome.booster_granted);
    assert_eq!(outcome.booster_count, 1);

    // The new cards put Eve on the leaderboard.
    let board = sdk.collections().leaderboard().unwrap();
    assert!(board.iter().any(|e| e.unique_cards > 0));
}
