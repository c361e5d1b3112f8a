/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
pub struct AppState {
    /// The async Campus TCG SDK instance. Handles dispatching blocking SDK
    /// operations to a thread pool internally.
    pub sdk: campus_tcg_sdk::AsyncCampusSdk,

    /// Async HTTP client used to exchange identity tokens for session
    /// cookies with the identity provider. Separate from the SDK's own
    /// blocking `reqwest` client.
    pub http: reqwest::Client,
}
