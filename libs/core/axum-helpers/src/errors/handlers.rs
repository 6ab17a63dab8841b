use std::any::Any;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::{ErrorCode, ErrorResponse, internal_error_response};

/// Handler for unmatched routes and unmatched methods.
///
/// Use it both as the router fallback and as the method-not-allowed fallback
/// so that every miss answers with the same envelope.
pub async fn not_found() -> Response {
    let body = Json(ErrorResponse::new(ErrorCode::RouteNotFound.default_message()));

    (StatusCode::NOT_FOUND, body).into_response()
}

/// Converts a caught handler panic into a redacted 500 envelope.
///
/// Meant for `tower_http::catch_panic::CatchPanicLayer::custom`.
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        "unknown panic payload".to_string()
    };

    tracing::error!(
        error_code = ErrorCode::Panic.code(),
        panic = %detail,
        "Request handler panicked"
    );

    internal_error_response(ErrorCode::Panic.default_message(), detail)
}
