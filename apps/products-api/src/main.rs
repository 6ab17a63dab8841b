//! Products API - REST server for the product catalog

use axum_helpers::server::create_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod app;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    if config.metrics_enabled {
        observability::init_metrics()?;
    }

    let state = AppState::new(config);
    let catalog_size = state.products.count_products().await?;
    observability::ProductMetrics::set_catalog_size(catalog_size);

    info!(
        products = catalog_size,
        environment = ?state.config.environment,
        "Product catalog ready"
    );

    let router = app::build_router(&state);

    info!(
        "Starting {} v{} on port {}",
        state.config.app.name, state.config.app.version, state.config.server.port
    );
    info!(
        "API documentation: http://localhost:{}/swagger-ui",
        state.config.server.port
    );

    create_app(router, &state.config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
