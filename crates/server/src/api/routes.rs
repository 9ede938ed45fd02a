use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::{handlers, middleware::metrics_middleware, tickets};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        // Health, config and metrics
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        .route("/metrics", get(handlers::get_metrics))
        // Tickets
        .route("/rounds/{round_id}/tickets", post(tickets::register_ticket))
        .route("/rounds/{round_id}/tickets", get(tickets::list_tickets))
        .route(
            "/rounds/{round_id}/tickets/random",
            post(tickets::enroll_random_ticket),
        )
        .route(
            "/rounds/{round_id}/random-numbers",
            post(tickets::generate_random_numbers),
        )
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
}
