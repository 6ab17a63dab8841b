//! Router composition for the binary

use axum::Router;
use axum_helpers::server::{create_router, health_router};

use crate::api;
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// API routes wrapped with docs, fallbacks and middleware, plus `/health`
pub fn build_router(state: &AppState) -> Router {
    let api_routes = api::routes(state);

    create_router::<ApiDoc>(api_routes, &state.config.environment)
        .merge(health_router(state.config.app))
}
