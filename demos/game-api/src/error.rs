use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

/// Unified error type that renders as a JSON `{"error": "..."}` response
/// with an appropriate HTTP status code.
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: msg.into(),
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.into(),
        }
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::CONFLICT,
            message: msg.into(),
        }
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            message: msg.into(),
        }
    }

    pub fn bad_gateway(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: msg.into(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<campus_tcg_sdk::CampusError> for AppError {
    fn from(e: campus_tcg_sdk::CampusError) -> Self {
        use campus_tcg_sdk::CampusError;
        match &e {
            CampusError::NotFound(msg) => AppError::not_found(msg.clone()),
            CampusError::InvalidArgument(msg) => AppError::bad_request(msg.clone()),
            CampusError::OutOfBoosters => AppError::conflict(e.to_string()),
            CampusError::NotYetCollectible { .. } => AppError::conflict(e.to_string()),
            CampusError::PoolExhausted { .. } => AppError::conflict(e.to_string()),
            _ => AppError::internal(e.to_string()),
        }
    }
}
