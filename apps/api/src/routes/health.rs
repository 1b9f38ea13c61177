use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "platform": "AgentHire Marketplace API",
        "version": env!("CARGO_PKG_VERSION"),
        "health": "/health",
        "marketplace": "/marketplace/health"
    }))
}

/// GET /health
/// Reports liveness and whether a provider key is configured.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "api_key_set": state.config.anthropic_api_key.is_some(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
