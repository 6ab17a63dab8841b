//! Type-safe error codes for structured logs and metrics.
//!
//! Error codes never reach the client body (the envelope only carries
//! `success`, `message`, `errors` and `error`). They exist so that log lines and
//! dashboards can group failures without parsing messages.
//!
//! # Example
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ValidationError;
//! assert_eq!(code.as_str(), "VALIDATION_ERROR");
//! assert_eq!(code.code(), 1001);
//! assert_eq!(code.default_message(), "Validation failed");
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request body failed business validation
    ValidationError,

    /// Request body could not be read as the expected JSON shape
    InvalidJson,

    /// Query string could not be decoded
    InvalidQuery,

    /// Request is malformed in a domain-specific way (e.g. missing search term)
    BadRequest,

    /// Requested resource was not found
    NotFound,

    /// No route matches the method and path
    RouteNotFound,

    // Server errors (5000-5999)
    /// An unexpected fault in the request handling path
    InternalError,

    /// A handler panicked and the panic was caught
    Panic,
}

impl ErrorCode {
    /// Get the SCREAMING_SNAKE_CASE identifier.
    ///
    /// ```rust
    /// use axum_helpers::errors::ErrorCode;
    ///
    /// assert_eq!(ErrorCode::NotFound.as_str(), "NOT_FOUND");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidJson => "INVALID_JSON",
            Self::InvalidQuery => "INVALID_QUERY",
            Self::BadRequest => "BAD_REQUEST",
            Self::NotFound => "NOT_FOUND",
            Self::RouteNotFound => "ROUTE_NOT_FOUND",
            Self::InternalError => "INTERNAL_ERROR",
            Self::Panic => "PANIC",
        }
    }

    /// Get the integer code for logging and monitoring.
    ///
    /// - 1000-1999: client errors
    /// - 5000-5999: server errors
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidJson => 1002,
            Self::InvalidQuery => 1003,
            Self::BadRequest => 1004,
            Self::NotFound => 1005,
            Self::RouteNotFound => 1006,
            Self::InternalError => 5001,
            Self::Panic => 5002,
        }
    }

    /// Get the default user-facing message.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Validation failed",
            Self::InvalidJson => "Invalid request body",
            Self::InvalidQuery => "Invalid query string",
            Self::BadRequest => "Bad request",
            Self::NotFound => "Resource not found",
            Self::RouteNotFound => "Route not found",
            Self::InternalError => "Internal server error",
            Self::Panic => "Something went wrong!",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
