use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

pub const NOT_FOUND_MESSAGE: &str = "Product not found";
pub const MISSING_QUERY_MESSAGE: &str = "Search query is required";

#[derive(Debug, Error)]
pub enum ProductError {
    /// Carries the id as it appeared in the request
    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Search query is required")]
    MissingQuery,

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(_) => AppError::NotFound(NOT_FOUND_MESSAGE.to_string()),
            ProductError::Validation(errors) => AppError::Validation(errors),
            ProductError::MissingQuery => AppError::BadRequest(MISSING_QUERY_MESSAGE.to_string()),
            ProductError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl<T> From<std::sync::PoisonError<T>> for ProductError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        ProductError::Internal(format!("product store lock poisoned: {err}"))
    }
}
