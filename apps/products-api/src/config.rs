//! Configuration for Products API

use core_config::{app_info, env_flag, server::ServerConfig, AppInfo, FromEnv};

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Load the default catalog at startup (`SEED_PRODUCTS`)
    pub seed_products: bool,
    /// Install the Prometheus recorder and serve `/metrics` (`METRICS_ENABLED`)
    pub metrics_enabled: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let seed_products = env_flag("SEED_PRODUCTS", true)?;
        let metrics_enabled = env_flag("METRICS_ENABLED", true)?;

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            seed_products,
            metrics_enabled,
        })
    }
}
