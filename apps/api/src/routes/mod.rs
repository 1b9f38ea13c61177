pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::jobs::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Marketplace API
        .route(
            "/marketplace/companies",
            get(handlers::handle_list_companies),
        )
        .route(
            "/marketplace/companies/:company_id",
            get(handlers::handle_get_company),
        )
        .route(
            "/marketplace/companies/:company_id/jobs",
            get(handlers::handle_list_jobs),
        )
        .route("/marketplace/submit", post(handlers::handle_submit))
        .route(
            "/marketplace/demo/:company_id/:job_type",
            get(handlers::handle_preview),
        )
        .route(
            "/marketplace/health",
            get(handlers::handle_marketplace_health),
        )
        .with_state(state)
}
