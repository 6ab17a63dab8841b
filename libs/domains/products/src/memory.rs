//! In-memory implementation of ProductRepository

use async_trait::async_trait;
use std::sync::RwLock;

use crate::error::ProductResult;
use crate::models::{seed_catalog, NewProduct, Product, ProductPage};
use crate::repository::ProductRepository;
use crate::store::ProductStore;

/// Process-local catalog guarded by a single lock.
///
/// Reads take the read lock, mutations the write lock. Guards never live
/// across an `.await`.
#[derive(Debug)]
pub struct InMemoryProductRepository {
    store: RwLock<ProductStore>,
}

impl InMemoryProductRepository {
    pub fn new(store: ProductStore) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }

    /// Repository preloaded with the default catalog
    pub fn seeded() -> Self {
        Self::new(ProductStore::with_seed(seed_catalog()))
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new(ProductStore::default())
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self, start: usize, end: usize) -> ProductResult<ProductPage> {
        let store = self.store.read()?;
        let products = store.list();
        let total = products.len();
        let end = end.min(total);
        let items = if start < end {
            products[start..end].to_vec()
        } else {
            Vec::new()
        };

        Ok(ProductPage { items, total })
    }

    async fn get_by_id(&self, id: u64) -> ProductResult<Option<Product>> {
        Ok(self.store.read()?.get(id).cloned())
    }

    async fn create(&self, input: NewProduct) -> ProductResult<Product> {
        Ok(self.store.write()?.insert(input))
    }

    async fn update(&self, id: u64, input: NewProduct) -> ProductResult<Option<Product>> {
        Ok(self.store.write()?.replace(id, input))
    }

    async fn delete(&self, id: u64) -> ProductResult<Option<Product>> {
        Ok(self.store.write()?.remove(id))
    }

    async fn search(&self, term: &str) -> ProductResult<Vec<Product>> {
        Ok(self.store.read()?.search(term))
    }

    async fn count(&self) -> ProductResult<usize> {
        Ok(self.store.read()?.len())
    }
}
