//! API routes module

pub mod help;
pub mod products;

use axum::{middleware, routing::get, Router};
use observability::{metrics_handler, metrics_middleware};

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    let routes = Router::new()
        .nest("/products", products::router(state))
        .merge(help::router(state.config.app));

    if !state.config.metrics_enabled {
        return routes;
    }

    // Only matched routes are measured; /metrics itself is not
    routes
        .route_layer(middleware::from_fn(metrics_middleware))
        .route("/metrics", get(metrics_handler))
}
