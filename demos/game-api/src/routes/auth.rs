use std::sync::Arc;

use axum::http::header;
use axum::response::{IntoResponse, Json, Response};
use axum::extract::State;
use serde::Deserialize;
use serde_json::{json, Value};

use campus_tcg_sdk::config::{PublicClientConfig, ENV_SESSION_ENDPOINT};

use crate::error::AppError;
use crate::state::AppState;

/// Session cookie lifetime: 5 days, matching the identity provider's
/// session-cookie expiry.
const SESSION_MAX_AGE_SECS: u64 = 60 * 60 * 24 * 5;

/// GET /api/client-config
///
/// The public subset of client configuration (auth domain, project id,
/// storage bucket, sender id, app id). The service key never leaves the
/// server.
pub async fn client_config() -> Json<PublicClientConfig> {
    Json(PublicClientConfig::from_env())
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    pub id_token: String,
}

/// POST /api/session
///
/// Exchange an identity token for a session cookie. The exchange itself is
/// a pass-through to the identity provider; this handler only sets the
/// resulting cookie: HTTP-only, secure, strict same-site, 5-day expiry.
pub async fn create_session(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateSessionRequest>,
) -> Result<Response, AppError> {
    let endpoint = std::env::var(ENV_SESSION_ENDPOINT)
        .map_err(|_| AppError::internal(format!("{} is not configured", ENV_SESSION_ENDPOINT)))?;

    let resp = state
        .http
        .post(&endpoint)
        .json(&json!({ "idToken": req.id_token }))
        .send()
        .await
        .map_err(|e| AppError::bad_gateway(format!("Identity provider unreachable: {e}")))?;

    if resp.status() == reqwest::StatusCode::UNAUTHORIZED {
        return Err(AppError::unauthorized("Invalid identity token"));
    }
    if !resp.status().is_success() {
        return Err(AppError::bad_gateway(format!(
            "Identity provider returned status {}",
            resp.status()
        )));
    }

    let body: Value = resp
        .json()
        .await
        .map_err(|e| AppError::bad_gateway(format!("Invalid JSON from identity provider: {e}")))?;

    let session_cookie = body
        .get("sessionCookie")
        .and_then(|v| v.as_str())
        .ok_or_else(|| AppError::bad_gateway("Identity provider response missing sessionCookie"))?
        .to_string();

    let cookie = format!(
        "session={}; Path=/; HttpOnly; Secure; SameSite=Strict; Max-Age={}",
        session_cookie, SESSION_MAX_AGE_SECS
    );

    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(json!({ "sessionCookie": session_cookie })),
    )
        .into_response())
}
