use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::{handlers, kitchen, middleware::metrics_middleware, orders};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    // API routes
    let api_routes = Router::new()
        // Health and config
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        // Orders
        .route("/orders", post(orders::place_order))
        .route("/orders/{order_id}", get(orders::get_order_status))
        .route("/status", post(orders::check_status))
        // Kitchen boundary
        .route(
            "/kitchen/donuts",
            post(kitchen::add_donut).get(kitchen::list_donuts),
        )
        .route("/kitchen/status", get(kitchen::get_status));

    Router::new()
        .nest("/api/v1", api_routes)
        .route("/metrics", get(handlers::metrics))
        .layer(from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
