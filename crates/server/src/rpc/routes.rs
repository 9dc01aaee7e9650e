//! Route configuration for the dashboard API.

use super::handlers::*;
use super::state::DashboardState;
use axum::{routing::get, Router};

/// Create the full router with all routes.
pub fn create_router(state: DashboardState) -> Router {
    Router::new()
        // Liveness probe (no prefix)
        .route("/health", get(health_handler))
        // Plain-text table for terminals and curl
        .route("/epoch-validators", get(epoch_validators_text_handler))
        // API v1 routes
        .nest("/api/v1", api_v1_routes())
        .with_state(state)
}

/// Create the `/api/v1` router.
fn api_v1_routes() -> Router<DashboardState> {
    Router::new()
        .route("/status", get(status_handler))
        .route("/epoch-validators", get(epoch_validators_handler))
}
