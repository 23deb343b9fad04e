//! API Module
//!
//! HTTP API layer for the trigger host.
//! Each submodule handles endpoints for a specific concern.

pub mod error;
pub mod health;
pub mod trigger;

use axum::{
    Router,
    routing::{any, get},
};
use tower_http::trace::TraceLayer;
use trigger_core::domain::http::HTTP_TRIGGERS;

/// Create the main API router with all endpoints
pub fn create_router() -> Router {
    let router = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Trigger listing
        .route("/api/triggers", get(trigger::list_triggers));

    // HTTP triggers accept every method
    HTTP_TRIGGERS
        .iter()
        .fold(router, |router, http_trigger| {
            router.route(
                http_trigger.route,
                any(move || trigger::invoke_trigger(http_trigger)),
            )
        })
        .fallback(error::not_found)
        .layer(TraceLayer::new_for_http())
}
