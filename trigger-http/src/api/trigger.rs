//! Trigger API Handlers
//!
//! The HTTP-trigger samples and the listing endpoint.

use axum::{Json, http::StatusCode, response::IntoResponse};
use trigger_core::domain::http::{HTTP_TRIGGERS, HttpTrigger};
use trigger_core::dto::trigger::TriggerSummary;

/// ANY /api/{trigger}
/// Ignores the request and returns the trigger's fixed body
pub async fn invoke_trigger(trigger: &'static HttpTrigger) -> impl IntoResponse {
    tracing::info!("Executing function '{}'", trigger.name);
    (StatusCode::OK, trigger.body)
}

/// GET /api/triggers
/// List registered triggers
pub async fn list_triggers() -> Json<Vec<TriggerSummary>> {
    tracing::debug!("Listing HTTP triggers");
    Json(HTTP_TRIGGERS.iter().map(TriggerSummary::from).collect())
}
