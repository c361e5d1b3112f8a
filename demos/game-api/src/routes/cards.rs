use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ListCardsParams {
    pub rarity: Option<String>,
}

/// GET /api/cards?rarity=shiny
///
/// List the cards of one rarity tier, for the weighted pack reveal flow.
pub async fn list_by_rarity(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListCardsParams>,
) -> Result<Json<Value>, AppError> {
    let rarity: campus_tcg_sdk::models::Rarity = params
        .rarity
        .ok_or_else(|| AppError::bad_request("Missing required query parameter: rarity"))?
        .parse()?;

    let cards = state.sdk.run(move |s| s.cards().by_rarity(rarity)).await?;
    Ok(Json(json!({ "cards": cards })))
}

/// GET /api/open-pack
///
/// The legacy rarity-blind pack: six distinct cards drawn uniformly from
/// the whole catalog. Does not touch any user record; the caller is
/// responsible for charging a booster.
pub async fn open_legacy_pack(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, AppError> {
    let pack = state.sdk.run(|s| s.boosters().legacy_pack()).await?;
    Ok(Json(json!({ "pack": pack })))
}

/// GET /api/memory-cards
///
/// Deal a memory board: eight random catalog cards duplicated into sixteen
/// shuffled slots, each slot carrying a unique id so the client can tell
/// the two copies of a pair apart.
pub async fn memory_cards(State(state): State<Arc<AppState>>) -> Result<Json<Value>, AppError> {
    let game = state.sdk.run(|s| s.minigame().deal()).await?;

    let cards: Vec<Value> = game
        .slots()
        .iter()
        .map(|slot| {
            json!({
                "id": slot.card.id,
                "name": slot.card.name,
                "imageURL": slot.card.image_url,
                "rarity": slot.card.rarity,
                "uniqueId": slot.key,
            })
        })
        .collect();

    Ok(Json(json!({ "cards": cards })))
}
