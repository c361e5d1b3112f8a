use std::env;
use std::path::PathBuf;

use serde::Serialize;

/// Environment variable naming the base URL of the hosted document store
/// (e.g. `https://store.example.com`).
pub const ENV_API_BASE: &str = "CAMPUS_API_BASE";

/// Environment variable holding the service key sent as a bearer token on
/// every store request. Server-side only; never expose to the browser.
pub const ENV_SERVICE_KEY: &str = "CAMPUS_SERVICE_KEY";

/// Environment variable naming the identity-provider endpoint that exchanges
/// an ID token for a session cookie.
pub const ENV_SESSION_ENDPOINT: &str = "CAMPUS_SESSION_ENDPOINT";

/// Collection holding the immutable card catalog.
pub const CARDS_COLLECTION: &str = "cards";

/// Collection holding one document per user (the user's collection record).
pub const USERS_COLLECTION: &str = "collections";

/// Path under the store base URL where document collections live.
pub const STORE_API_VERSION: &str = "v1";

pub fn default_cache_dir() -> PathBuf {
    if let Some(cache) = dirs::cache_dir() {
        cache.join("campus-tcg-sdk")
    } else {
        PathBuf::from(".campus-tcg-cache")
    }
}

/// Read the store base URL from the environment.
pub fn api_base_from_env() -> Option<String> {
    env::var(ENV_API_BASE).ok()
}

/// Read the service key from the environment.
pub fn service_key_from_env() -> Option<String> {
    env::var(ENV_SERVICE_KEY).ok()
}

// ---------------------------------------------------------------------------
// PublicClientConfig
// ---------------------------------------------------------------------------

/// The subset of client configuration that is safe to expose to browsers.
///
/// Everything else in the environment (service key in particular) stays
/// server-side. Serialized camelCase so it can be handed to the web client
/// as-is.
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PublicClientConfig {
    pub auth_domain: Option<String>,
    pub project_id: Option<String>,
    pub storage_bucket: Option<String>,
    pub messaging_sender_id: Option<String>,
    pub app_id: Option<String>,
}

impl PublicClientConfig {
    /// Assemble the public configuration from `CAMPUS_PUBLIC_*` variables.
    ///
    /// Missing variables are simply omitted (`null` on the wire) rather than
    /// treated as errors; the web client decides what it requires.
    pub fn from_env() -> Self {
        Self {
            auth_domain: env::var("CAMPUS_PUBLIC_AUTH_DOMAIN").ok(),
            project_id: env::var("CAMPUS_PUBLIC_PROJECT_ID").ok(),
            storage_bucket: env::var("CAMPUS_PUBLIC_STORAGE_BUCKET").ok(),
            messaging_sender_id: env::var("CAMPUS_PUBLIC_SENDER_ID").ok(),
            app_id: env::var("CAMPUS_PUBLIC_APP_ID").ok(),
        }
    }
}
