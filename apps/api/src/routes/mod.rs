pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::billing::handlers as billing_handlers;
use crate::gate::handlers as gate_handlers;
use crate::generation::handlers as generation_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Generation API
        .route("/api/generate", post(generation_handlers::handle_generate))
        .route(
            "/api/generate/sections",
            post(generation_handlers::handle_generate_sections),
        )
        // Gate status
        .route("/api/usage", get(gate_handlers::handle_usage))
        // Billing
        .route(
            "/api/billing/purchase",
            post(billing_handlers::handle_purchase),
        )
        .route(
            "/api/billing/restore",
            post(billing_handlers::handle_restore),
        )
        .with_state(state)
}
