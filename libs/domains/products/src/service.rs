//! Product Service - Business logic layer

use observability::ProductMetrics;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::error::{ProductError, ProductResult};
use crate::models::{Pagination, Product, ProductListResponse, ProductInput};
use crate::repository::ProductRepository;
use crate::validation::to_new_product;

/// Product service providing business logic operations
///
/// The service layer handles validation, pagination and search rules, and
/// orchestrates repository operations.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// One page of the catalog with pagination metadata
    #[instrument(skip(self))]
    pub async fn list_products(
        &self,
        page: usize,
        limit: usize,
    ) -> ProductResult<ProductListResponse> {
        let (start, end) = Pagination::window(page, limit);
        let result = self.repository.list(start, end).await?;
        ProductMetrics::record_listed();

        Ok(ProductListResponse {
            success: true,
            data: result.items,
            pagination: Pagination::new(page, limit, result.total),
        })
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: u64) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found("get", id))
    }

    /// Fail with not-found, counted against `operation`, unless `id` is stored
    #[instrument(skip(self))]
    pub async fn ensure_exists(&self, id: u64, operation: &'static str) -> ProductResult<()> {
        match self.repository.get_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(not_found(operation, id)),
        }
    }

    /// Create a new product
    #[instrument(skip(self, input))]
    pub async fn create_product(&self, input: ProductInput) -> ProductResult<Product> {
        let candidate =
            to_new_product(input).inspect_err(|_| ProductMetrics::record_rejected("create"))?;

        let product = self.repository.create(candidate).await?;
        info!(product_id = product.id, "Product created");
        ProductMetrics::record_created();
        self.refresh_catalog_size().await;

        Ok(product)
    }

    /// Replace an existing product.
    ///
    /// An unknown id is reported before the body is validated. The body is
    /// validated on its own, never merged with the stored product.
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: u64, input: ProductInput) -> ProductResult<Product> {
        self.ensure_exists(id, "update").await?;

        let candidate =
            to_new_product(input).inspect_err(|_| ProductMetrics::record_rejected("update"))?;

        // Deleted between the existence check and the write
        let product = self
            .repository
            .update(id, candidate)
            .await?
            .ok_or_else(|| not_found("update", id))?;

        info!(product_id = product.id, "Product updated");
        ProductMetrics::record_updated();

        Ok(product)
    }

    /// Delete a product, returning what was removed
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: u64) -> ProductResult<Product> {
        let product = self
            .repository
            .delete(id)
            .await?
            .ok_or_else(|| not_found("delete", id))?;

        info!(product_id = product.id, "Product deleted");
        ProductMetrics::record_deleted();
        self.refresh_catalog_size().await;

        Ok(product)
    }

    /// Search products by name or description.
    ///
    /// The query is trimmed and matched case-insensitively; a missing or blank
    /// query is rejected.
    #[instrument(skip(self))]
    pub async fn search_products(&self, query: Option<&str>) -> ProductResult<Vec<Product>> {
        let term = query.map(str::trim).unwrap_or_default();
        if term.is_empty() {
            ProductMetrics::record_rejected("search");
            return Err(ProductError::MissingQuery);
        }

        let products = self.repository.search(&term.to_lowercase()).await?;
        ProductMetrics::record_search(products.len());

        Ok(products)
    }

    /// Number of stored products
    #[instrument(skip(self))]
    pub async fn count_products(&self) -> ProductResult<usize> {
        self.repository.count().await
    }

    async fn refresh_catalog_size(&self) {
        match self.repository.count().await {
            Ok(count) => ProductMetrics::set_catalog_size(count),
            Err(e) => tracing::warn!("Failed to read catalog size: {}", e),
        }
    }
}

fn not_found(operation: &'static str, id: u64) -> ProductError {
    ProductMetrics::record_not_found(operation);
    ProductError::NotFound(id.to_string())
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewProduct, ProductPage};
    use crate::repository::MockProductRepository;
    use crate::validation::{DESCRIPTION_REQUIRED, NAME_REQUIRED, PRICE_POSITIVE};
    use mockall::predicate::eq;

    fn laptop() -> Product {
        Product {
            id: 1,
            name: "Laptop".to_string(),
            price: 999.99,
            description: "High-performance laptop for work and gaming".to_string(),
        }
    }

    #[tokio::test]
    async fn test_list_products_requests_page_window() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_list()
            .with(eq(2), eq(4))
            .returning(|_, _| {
                Ok(ProductPage {
                    items: vec![laptop()],
                    total: 3,
                })
            });

        let service = ProductService::new(mock_repo);
        let response = service.list_products(2, 2).await.unwrap();

        assert!(response.success);
        assert_eq!(response.data, vec![laptop()]);
        assert_eq!(response.pagination, Pagination::new(2, 2, 3));
    }

    #[tokio::test]
    async fn test_get_product_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(999))
            .returning(|_| Ok(None));

        let service = ProductService::new(mock_repo);
        let err = service.get_product(999).await.unwrap_err();

        assert!(matches!(err, ProductError::NotFound(ref id) if id == "999"));
    }

    #[tokio::test]
    async fn test_create_product_trims_before_storing() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_create()
            .with(eq(NewProduct::new("Pen", 2.5, "Blue ink")))
            .times(1)
            .returning(|input| {
                Ok(Product {
                    id: 4,
                    name: input.name,
                    price: input.price,
                    description: input.description,
                })
            });
        mock_repo.expect_count().returning(|| Ok(4));

        let service = ProductService::new(mock_repo);
        let product = service
            .create_product(ProductInput::new("  Pen ", 2.5, " Blue ink "))
            .await
            .unwrap();

        assert_eq!(product.id, 4);
        assert_eq!(product.name, "Pen");
    }

    #[tokio::test]
    async fn test_create_invalid_product_never_touches_repository() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_create().never();

        let service = ProductService::new(mock_repo);
        let err = service
            .create_product(ProductInput::new("", -1.0, ""))
            .await
            .unwrap_err();

        match err {
            ProductError::Validation(errors) => {
                assert_eq!(errors, vec![NAME_REQUIRED, PRICE_POSITIVE, DESCRIPTION_REQUIRED]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found_even_with_valid_body() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(42))
            .returning(|_| Ok(None));
        mock_repo.expect_update().never();

        let service = ProductService::new(mock_repo);
        let err = service
            .update_product(42, ProductInput::new("Pen", 1.0, "Blue"))
            .await
            .unwrap_err();

        assert!(matches!(err, ProductError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_unknown_id_with_invalid_body_is_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_get_by_id().returning(|_| Ok(None));

        let service = ProductService::new(mock_repo);
        let err = service
            .update_product(42, ProductInput::default())
            .await
            .unwrap_err();

        assert!(matches!(err, ProductError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_ensure_exists() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(1))
            .returning(|_| Ok(Some(laptop())));
        mock_repo
            .expect_get_by_id()
            .with(eq(999))
            .returning(|_| Ok(None));

        let service = ProductService::new(mock_repo);
        assert!(service.ensure_exists(1, "update").await.is_ok());
        assert!(matches!(
            service.ensure_exists(999, "update").await,
            Err(ProductError::NotFound(ref id)) if id == "999"
        ));
    }

    #[tokio::test]
    async fn test_update_validates_body_without_merging() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(1))
            .returning(|_| Ok(Some(laptop())));
        mock_repo.expect_update().never();

        let service = ProductService::new(mock_repo);
        // Only the price is sent; the stored name and description are not reused
        let err = service
            .update_product(
                1,
                ProductInput {
                    price: Some(10.0),
                    ..ProductInput::default()
                },
            )
            .await
            .unwrap_err();

        match err {
            ProductError::Validation(errors) => {
                assert_eq!(errors, vec![NAME_REQUIRED, DESCRIPTION_REQUIRED]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_update_replaces_product() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Ok(Some(laptop())));
        mock_repo
            .expect_update()
            .with(eq(1), eq(NewProduct::new("Gaming Laptop", 1299.0, "Faster")))
            .returning(|id, input| {
                Ok(Some(Product {
                    id,
                    name: input.name,
                    price: input.price,
                    description: input.description,
                }))
            });

        let service = ProductService::new(mock_repo);
        let product = service
            .update_product(1, ProductInput::new("Gaming Laptop", 1299.0, "Faster"))
            .await
            .unwrap();

        assert_eq!(product.id, 1);
        assert_eq!(product.price, 1299.0);
    }

    #[tokio::test]
    async fn test_delete_missing_product() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_delete().returning(|_| Ok(None));
        mock_repo.expect_count().never();

        let service = ProductService::new(mock_repo);
        let err = service.delete_product(999).await.unwrap_err();

        assert!(matches!(err, ProductError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_returns_removed_product() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_delete()
            .with(eq(1))
            .returning(|_| Ok(Some(laptop())));
        mock_repo.expect_count().returning(|| Ok(2));

        let service = ProductService::new(mock_repo);
        assert_eq!(service.delete_product(1).await.unwrap(), laptop());
    }

    #[tokio::test]
    async fn test_search_trims_and_lowercases_query() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_search()
            .withf(|term: &str| term == "laptop")
            .returning(|_| Ok(vec![laptop()]));

        let service = ProductService::new(mock_repo);
        let results = service.search_products(Some("  LapTop ")).await.unwrap();

        assert_eq!(results, vec![laptop()]);
    }

    #[tokio::test]
    async fn test_search_rejects_missing_or_blank_query() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_search().never();

        let service = ProductService::new(mock_repo);
        for query in [None, Some(""), Some("   ")] {
            let err = service.search_products(query).await.unwrap_err();
            assert!(matches!(err, ProductError::MissingQuery), "query {query:?}");
        }
    }

    #[tokio::test]
    async fn test_repository_failure_propagates() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(ProductError::Internal("lock poisoned".to_string())));

        let service = ProductService::new(mock_repo);
        let err = service.get_product(1).await.unwrap_err();

        assert!(matches!(err, ProductError::Internal(_)));
    }
}
