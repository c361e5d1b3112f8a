use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::Json;
use chrono::Local;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetBoostersRequest {
    pub booster_count: u32,
}

/// POST /api/users/:id/boosters
///
/// Set a user's booster balance to an absolute value.
pub async fn set_boosters(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Json(req): Json<SetBoostersRequest>,
) -> Result<Json<Value>, AppError> {
    state
        .sdk
        .run(move |s| s.collections().set_booster_count(&user_id, req.booster_count))
        .await?;
    Ok(Json(json!({ "success": true })))
}

/// POST /api/users/:id/open-pack
///
/// Open one weighted booster for the user. Rejects with 409 when the
/// balance is zero; on success the pack is committed to the collection and
/// returned for the reveal flow.
pub async fn open_pack(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let pack = state
        .sdk
        .run(move |s| s.boosters().open_pack(&user_id))
        .await?;
    Ok(Json(json!({ "pack": pack })))
}

/// GET /api/users/:id/entitlement
///
/// Whether the user's free scheduled booster is collectible right now, and
/// when the next slot opens.
pub async fn entitlement(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let now = Local::now().naive_local();
    let availability = state
        .sdk
        .run(move |s| s.entitlement().availability(&user_id, now))
        .await?;
    Ok(Json(json!({
        "canCollect": availability.can_collect,
        "nextAt": availability.next_at,
    })))
}

/// POST /api/users/:id/entitlement/collect
///
/// Collect the free booster for the current slot. Rejects with 409 when no
/// slot has elapsed since the last collection.
pub async fn collect_entitlement(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let now = Local::now().naive_local();
    let availability = state
        .sdk
        .run(move |s| s.entitlement().collect(&user_id, now))
        .await?;
    Ok(Json(json!({
        "canCollect": availability.can_collect,
        "nextAt": availability.next_at,
    })))
}

/// GET /api/leaderboard
///
/// Players ranked by distinct cards owned, ties broken by total cards.
pub async fn leaderboard(State(state): State<Arc<AppState>>) -> Result<Json<Value>, AppError> {
    let entries = state.sdk.run(|s| s.collections().leaderboard()).await?;
    let count = entries.len();
    Ok(Json(json!({ "data": entries, "count": count })))
}
