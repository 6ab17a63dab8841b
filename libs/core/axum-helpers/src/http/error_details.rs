use axum::{
    body::Body,
    extract::Request,
    http::header,
    middleware::Next,
    response::Response,
};

use crate::errors::{ErrorResponse, InternalErrorDetail};

/// Middleware that puts the underlying cause of a 500 into the `error` field.
///
/// Only install it where leaking internals is acceptable (development). Without
/// it, internal failures answer with `"error": "Internal server error"`.
pub async fn expose_error_details(request: Request, next: Next) -> Response {
    let response = next.run(request).await;

    let detail = response.extensions().get::<InternalErrorDetail>().cloned();
    let Some(detail) = detail else {
        return response;
    };

    let body = ErrorResponse::new(detail.message).with_error(detail.detail);
    let Ok(bytes) = serde_json::to_vec(&body) else {
        return response;
    };

    let (mut parts, _) = response.into_parts();
    parts.headers.remove(header::CONTENT_LENGTH);
    Response::from_parts(parts, Body::from(bytes))
}
