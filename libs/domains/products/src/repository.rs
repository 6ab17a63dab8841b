use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::{NewProduct, Product, ProductPage};

/// Repository trait for Product persistence
///
/// This trait defines the data access interface for products. The service
/// only ever talks to the catalog through it, so tests can swap in a mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Products in `[start, end)` of insertion order, clipped, plus the total count
    async fn list(&self, start: usize, end: usize) -> ProductResult<ProductPage>;

    /// Get a product by ID
    async fn get_by_id(&self, id: u64) -> ProductResult<Option<Product>>;

    /// Store a new product under the next id
    async fn create(&self, input: NewProduct) -> ProductResult<Product>;

    /// Replace every field but the id; `None` if the id is absent
    async fn update(&self, id: u64, input: NewProduct) -> ProductResult<Option<Product>>;

    /// Remove a product, returning it; `None` if the id is absent
    async fn delete(&self, id: u64) -> ProductResult<Option<Product>>;

    /// Products whose name or description contains `term` (already lowercased)
    async fn search(&self, term: &str) -> ProductResult<Vec<Product>>;

    /// Number of stored products
    async fn count(&self) -> ProductResult<usize>;
}
