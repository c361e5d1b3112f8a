mod error;
mod routes;
mod state;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=info".into()),
        )
        .init();

    tracing::info!("initializing Campus TCG SDK");
    let sdk = campus_tcg_sdk::AsyncCampusSdk::builder()
        .build()
        .await
        .expect("Failed to initialize Campus TCG SDK");

    let state = Arc::new(AppState {
        sdk,
        http: reqwest::Client::new(),
    });

    let app = Router::new()
        .route("/api/client-config", get(routes::auth::client_config))
        .route("/api/session", post(routes::auth::create_session))
        .route("/api/cards", get(routes::cards::list_by_rarity))
        .route("/api/open-pack", get(routes::cards::open_legacy_pack))
        .route("/api/memory-cards", get(routes::cards::memory_cards))
        .route("/api/leaderboard", get(routes::users::leaderboard))
        .route("/api/users/{id}/boosters", post(routes::users::set_boosters))
        .route("/api/users/{id}/open-pack", post(routes::users::open_pack))
        .route(
            "/api/users/{id}/entitlement",
            get(routes::users::entitlement),
        )
        .route(
            "/api/users/{id}/entitlement/collect",
            post(routes::users::collect_entitlement),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(3000);
    let addr = format!("0.0.0.0:{port}");
    tracing::info!(%addr, "listening");
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
