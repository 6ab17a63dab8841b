use super::shutdown::shutdown_signal;
use crate::errors::handlers::{handle_panic, not_found};
use crate::http::{create_permissive_cors_layer, expose_error_details, security_headers};
use axum::{Router, middleware};
use core_config::{Environment, server::ServerConfig};
use std::io;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::normalize_path::NormalizePath;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;

/// Starts the Axum server with graceful shutdown.
///
/// # Errors
/// Returns an error if:
/// - The TCP listener fails to bind to the configured address
/// - The server encounters an error during operation
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use core_config::server::ServerConfig;
/// use axum_helpers::server::create_app;
///
/// #[tokio::main]
/// async fn main() -> std::io::Result<()> {
///     create_app(Router::new(), &ServerConfig::default()).await
/// }
/// ```
pub async fn create_app(router: Router, server_config: &ServerConfig) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;

    info!("Server starting on {}", listener.local_addr()?);
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        })?;

    Ok(())
}

/// Wraps the API routes with documentation and the shared middleware stack.
///
/// This function sets up:
/// - OpenAPI documentation (Swagger UI, ReDoc, RapiDoc, Scalar)
/// - The API routes, merged at the root, with a trailing slash trimmed
///   before routing (`/products/` reaches `/products`)
/// - A JSON 404 for unknown paths and for known paths with an unknown method
/// - Panic recovery answering with a 500 envelope
/// - Internal error details in 500 bodies, unless `environment` hides them
/// - Request tracing, security headers, permissive CORS and compression
///
/// Health and metrics endpoints are added by the app with `health_router()`
/// and its own routes.
///
/// # Example
/// ```ignore
/// use axum_helpers::server::create_router;
/// use core_config::Environment;
///
/// let api_routes = Router::new()
///     .nest("/products", domain_products::router(service));
///
/// let router = create_router::<ApiDoc>(api_routes, &Environment::from_env());
/// ```
pub fn create_router<T>(apis: Router, environment: &Environment) -> Router
where
    T: OpenApi + 'static,
{
    use utoipa_rapidoc::RapiDoc;
    use utoipa_redoc::{Redoc, Servable as RedocServable};
    use utoipa_scalar::{Scalar, Servable as ScalarServable};
    use utoipa_swagger_ui::SwaggerUi;

    let mut api = apis
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .layer(CatchPanicLayer::custom(handle_panic));

    // Must sit outside the panic layer so caught panics get their detail too
    if environment.exposes_error_details() {
        api = api.layer(middleware::from_fn(expose_error_details));
    }

    // The doc UIs redirect `/swagger-ui` to `/swagger-ui/`, so they stay
    // outside the normalized API
    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", T::openapi()))
        .method_not_allowed_fallback(not_found)
        .fallback_service(NormalizePath::trim_trailing_slash(api));

    router
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(create_permissive_cors_layer())
        // gzip, br, deflate, zstd based on Accept-Encoding
        .layer(CompressionLayer::new())
}
