//! Custom extractors for Axum handlers.
//!
//! Both extractors wrap the stock axum ones and turn their rejections into
//! [`AppError`](crate::errors::AppError), so a malformed body or query string
//! answers with the standard error envelope instead of plain text.

pub mod json_body;
pub mod query_params;

pub use json_body::JsonBody;
pub use query_params::QueryParams;
