//! # General Route Handlers
//!
//! The root banner and the health check.

use super::AppState;
use crate::types::HealthResponse;
use axum::{extract::State, Json};

/// The handler for the root (`/`) endpoint.
pub async fn root() -> &'static str {
    "listing-gen server is running."
}

/// The handler for the health check (`/health`) endpoint.
///
/// Always answers 200 with the provider state, even when no provider is
/// configured.
pub async fn health_check(State(app_state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        ai_available: app_state.listing.ai.is_available(),
        api_key_set: app_state.listing.ai.api_key_set,
    })
}
