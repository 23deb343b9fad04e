//! API Error Handling
//!
//! Unified error types and conversion for API responses.

use axum::{
    Json,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};

/// API error type
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

/// Fallback for routes that match no trigger
pub async fn not_found(uri: Uri) -> ApiError {
    tracing::debug!("No trigger registered for {}", uri.path());
    ApiError::NotFound(format!("No function registered for route {}", uri.path()))
}
