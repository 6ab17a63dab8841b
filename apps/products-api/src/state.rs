//! Application state management

use domain_products::{
    seed_catalog, InMemoryProductRepository, ProductService, ProductStore,
};

use crate::config::Config;

pub type Products = ProductService<InMemoryProductRepository>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub products: Products,
}

impl AppState {
    /// Builds the catalog once; every router shares it through the service.
    pub fn new(config: Config) -> Self {
        let store = if config.seed_products {
            ProductStore::with_seed(seed_catalog())
        } else {
            ProductStore::new(1)
        };
        let products = ProductService::new(InMemoryProductRepository::new(store));

        Self { config, products }
    }
}
