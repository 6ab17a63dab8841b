//! Products Domain
//!
//! This module provides a complete domain implementation for an in-memory
//! product catalog.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, validation, pagination
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │    Store    │  ← Ordered product list and id counter
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{handlers, InMemoryProductRepository, ProductService};
//!
//! // Create a repository holding the default catalog and a service
//! let repository = InMemoryProductRepository::seeded();
//! let service = ProductService::new(repository);
//!
//! // Create Axum router, mounted by the app under /products
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod repository;
pub mod service;
pub mod store;
pub mod validation;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use memory::InMemoryProductRepository;
pub use models::{
    seed_catalog, ListQuery, NewProduct, Pagination, Product, ProductInput, ProductListResponse,
    ProductPage, SearchQuery, SearchResponse,
};
pub use repository::ProductRepository;
pub use service::ProductService;
pub use store::ProductStore;
pub use validation::validate_product;
