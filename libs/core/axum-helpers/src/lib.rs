//! # Axum Helpers
//!
//! Shared building blocks for the HTTP services in this workspace.
//!
//! ## Modules
//!
//! - **[`server`]**: Router composition, health check, graceful shutdown
//! - **[`http`]**: HTTP middleware (CORS, security headers, error detail exposure)
//! - **[`errors`]**: The `{success: false, ...}` error envelope and [`AppError`]
//! - **[`extractors`]**: JSON body and query extractors answering with the envelope
//! - **[`envelope`]**: The `{success: true, data}` success envelope
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_app, create_router};
//! use core_config::{Environment, server::ServerConfig};
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let api_routes = Router::new(); // Add your routes
//!     let router = create_router::<ApiDoc>(api_routes, &Environment::from_env());
//!
//!     create_app(router, &ServerConfig::default()).await
//! }
//! ```

pub mod envelope;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

// Re-export server types
pub use server::{HealthResponse, create_app, create_router, health_router, shutdown_signal};

// Re-export HTTP middleware
pub use http::{create_permissive_cors_layer, expose_error_details, security_headers};

// Re-export error types
pub use errors::{AppError, ErrorCode, ErrorResponse, InternalErrorDetail};

// Re-export extractors
pub use extractors::{JsonBody, QueryParams};

pub use envelope::Envelope;
