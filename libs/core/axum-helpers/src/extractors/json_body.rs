//! JSON body extractor with enveloped rejections.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;

/// JSON extractor whose rejection is a 400 error envelope.
///
/// Missing content type, syntax errors and type mismatches all map to
/// `400 {"success": false, "message": "Invalid request body", "errors": [..]}`.
/// Business validation is left to the handler, which may need to check
/// other things (like existence) first.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::JsonBody;
///
/// async fn create(JsonBody(input): JsonBody<CreateThing>) -> String {
///     format!("Creating: {}", input.name)
/// }
/// ```
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        Ok(JsonBody(data))
    }
}
