use tower_http::cors::CorsLayer;

/// Creates a permissive CORS layer.
///
/// Any origin, method and header is allowed; no credentials.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}
