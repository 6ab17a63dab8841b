use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::validation::not_blank;

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Identifier assigned by the store, never reused
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = "Laptop")]
    pub name: String,
    #[schema(example = 999.99)]
    pub price: f64,
    #[schema(example = "High-performance laptop for work and gaming")]
    pub description: String,
}

/// Request body for creating or replacing a product.
///
/// Every field is optional at the shape level so that missing or `null`
/// fields are reported with the validation messages instead of a
/// deserialization error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct ProductInput {
    #[validate(
        required(message = "Product name is required and must be a non-empty string"),
        custom(
            function = "not_blank",
            message = "Product name is required and must be a non-empty string"
        )
    )]
    #[schema(example = "Laptop")]
    pub name: Option<String>,

    #[validate(
        required(message = "Price must be a positive number"),
        range(exclusive_min = 0.0, message = "Price must be a positive number")
    )]
    #[schema(example = 999.99)]
    pub price: Option<f64>,

    #[validate(
        required(message = "Product description is required and must be a non-empty string"),
        custom(
            function = "not_blank",
            message = "Product description is required and must be a non-empty string"
        )
    )]
    #[schema(example = "High-performance laptop for work and gaming")]
    pub description: Option<String>,
}

impl ProductInput {
    pub fn new(name: impl Into<String>, price: f64, description: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            price: Some(price),
            description: Some(description.into()),
        }
    }
}

/// A validated product candidate, trimmed and ready for the store
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub description: String,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, price: f64, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            description: description.into(),
        }
    }
}

/// Catalog loaded at startup unless seeding is disabled
pub fn seed_catalog() -> Vec<NewProduct> {
    vec![
        NewProduct::new(
            "Laptop",
            999.99,
            "High-performance laptop for work and gaming",
        ),
        NewProduct::new(
            "Smartphone",
            599.99,
            "Latest smartphone with advanced features",
        ),
        NewProduct::new(
            "Wireless Headphones",
            199.99,
            "Premium wireless headphones with noise cancellation",
        ),
    ]
}

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 10;

/// Query parameters for listing products.
///
/// Kept as raw strings: anything that is not a positive integer falls back
/// to the default instead of rejecting the request. Built from the raw
/// query pairs so a repeated key never fails; the first occurrence wins.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Page number, starting at 1 (default 1)
    #[param(example = "1")]
    pub page: Option<String>,
    /// Items per page (default 10)
    #[param(example = "10")]
    pub limit: Option<String>,
}

impl FromIterator<(String, String)> for ListQuery {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "page" => &mut query.page,
                "limit" => &mut query.limit,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }
}

impl ListQuery {
    pub fn page(&self) -> usize {
        parse_positive(self.page.as_deref()).unwrap_or(DEFAULT_PAGE)
    }

    pub fn limit(&self) -> usize {
        parse_positive(self.limit.as_deref()).unwrap_or(DEFAULT_LIMIT)
    }
}

fn parse_positive(raw: Option<&str>) -> Option<usize> {
    raw.and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|value| *value > 0)
}

/// Pagination metadata returned with a product listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub items_per_page: usize,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl Pagination {
    /// Window `[start, end)` of the requested page, not yet clipped to the total
    pub fn window(page: usize, limit: usize) -> (usize, usize) {
        let start = page.saturating_sub(1).saturating_mul(limit);
        let end = page.saturating_mul(limit);
        (start, end)
    }

    pub fn new(page: usize, limit: usize, total: usize) -> Self {
        let (_, end) = Self::window(page, limit);
        Self {
            current_page: page,
            total_pages: total.div_ceil(limit.max(1)),
            total_items: total,
            items_per_page: limit,
            has_next_page: end < total,
            has_prev_page: page > 1,
        }
    }
}

/// One page of products plus the catalog size
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPage {
    pub items: Vec<Product>,
    pub total: usize,
}

/// Response body for `GET /products`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductListResponse {
    pub success: bool,
    pub data: Vec<Product>,
    pub pagination: Pagination,
}

/// Query parameters for searching products
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Case-insensitive term matched against name and description
    #[param(example = "laptop")]
    pub q: Option<String>,
}

/// Response body for `GET /products/search`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub success: bool,
    pub data: Vec<Product>,
    pub total_results: usize,
    /// The query exactly as received
    pub search_query: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_defaults() {
        let query = ListQuery::default();
        assert_eq!(query.page(), 1);
        assert_eq!(query.limit(), 10);
    }

    #[test]
    fn test_list_query_falls_back_on_invalid_values() {
        for raw in ["abc", "0", "-1", "", "1.5"] {
            let query = ListQuery {
                page: Some(raw.to_string()),
                limit: Some(raw.to_string()),
            };
            assert_eq!(query.page(), DEFAULT_PAGE, "page {raw:?}");
            assert_eq!(query.limit(), DEFAULT_LIMIT, "limit {raw:?}");
        }
    }

    #[test]
    fn test_list_query_parses_positive_values() {
        let query = ListQuery {
            page: Some("3".to_string()),
            limit: Some(" 25 ".to_string()),
        };
        assert_eq!(query.page(), 3);
        assert_eq!(query.limit(), 25);
    }

    #[test]
    fn test_list_query_keeps_first_repeated_key() {
        let query: ListQuery = [
            ("page", "2"),
            ("sort", "name"),
            ("page", "7"),
            ("limit", "abc"),
            ("limit", "5"),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();

        assert_eq!(query.page(), 2);
        // The first limit is malformed, so the default applies
        assert_eq!(query.limit(), DEFAULT_LIMIT);
    }

    #[test]
    fn test_pagination_over_seed_catalog() {
        let pagination = Pagination::new(1, 2, 3);
        assert_eq!(
            pagination,
            Pagination {
                current_page: 1,
                total_pages: 2,
                total_items: 3,
                items_per_page: 2,
                has_next_page: true,
                has_prev_page: false,
            }
        );
    }

    #[test]
    fn test_pagination_last_and_out_of_range_pages() {
        let last = Pagination::new(2, 2, 3);
        assert!(!last.has_next_page);
        assert!(last.has_prev_page);

        let beyond = Pagination::new(9, 10, 3);
        assert_eq!(beyond.total_pages, 1);
        assert!(!beyond.has_next_page);
    }

    #[test]
    fn test_pagination_empty_catalog() {
        let pagination = Pagination::new(1, 10, 0);
        assert_eq!(pagination.total_pages, 0);
        assert!(!pagination.has_next_page);
        assert!(!pagination.has_prev_page);
    }

    #[test]
    fn test_pagination_window_saturates() {
        assert_eq!(Pagination::window(usize::MAX, usize::MAX), (usize::MAX, usize::MAX));
        assert!(!Pagination::new(usize::MAX, usize::MAX, 3).has_next_page);
    }

    #[test]
    fn test_pagination_serializes_camel_case() {
        let json = serde_json::to_value(Pagination::new(1, 10, 3)).unwrap();
        assert_eq!(json["currentPage"], 1);
        assert_eq!(json["totalPages"], 1);
        assert_eq!(json["itemsPerPage"], 10);
        assert_eq!(json["hasPrevPage"], false);
    }

    #[test]
    fn test_product_input_accepts_null_and_missing_fields() {
        let input: ProductInput =
            serde_json::from_value(serde_json::json!({"name": null, "price": 10})).unwrap();
        assert_eq!(input.name, None);
        assert_eq!(input.price, Some(10.0));
        assert_eq!(input.description, None);
    }

    #[test]
    fn test_product_input_rejects_wrong_types() {
        let result: Result<ProductInput, _> =
            serde_json::from_value(serde_json::json!({"price": "abc"}));
        assert!(result.is_err());
    }
}
