//! Liveness endpoints
//!
//! GET /        - service banner
//! GET /health  - liveness probe (server is up)

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;
use std::sync::Arc;

use crate::state::AppState;

/// GET /health - liveness probe
///
/// Always returns 200 OK while the process is alive.
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "service": "krishi-gateway" })),
    )
}

/// GET / - service banner, kept for parity with the agent-per-service
/// deployments this gateway replaces.
pub async fn root() -> impl IntoResponse {
    Json(json!({ "status": "Krishi gateway is running" }))
}

/// Build the health router sub-tree
pub fn health_router() -> axum::Router<Arc<AppState>> {
    use axum::routing::get;
    axum::Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}
