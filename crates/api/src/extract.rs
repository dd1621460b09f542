//! Request extractors that reject with [`AppError`] instead of axum's
//! plain-text rejections, so clients always receive the JSON error envelope.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use tindahero_core::error::CoreError;

use crate::error::AppError;

/// A `Json<T>` wrapper that converts deserialization failures into
/// [`CoreError::Validation`].
///
/// Type mismatches are reported without the offending value, since the
/// value may be a password.
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Core(CoreError::Validation(json_message(&rejection))))?;
        Ok(AppJson(value))
    }
}

fn json_message(rejection: &JsonRejection) -> String {
    match rejection {
        JsonRejection::JsonDataError(_) => {
            "Request body contains a field with an invalid type".to_string()
        }
        other => other.body_text(),
    }
}

/// A `Path<T>` wrapper that converts malformed path segments (e.g. an id
/// that is not a UUID) into [`CoreError::Validation`].
pub struct AppPath<T>(pub T);

impl<S, T> FromRequestParts<S> for AppPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection: PathRejection| {
                AppError::Core(CoreError::Validation(rejection.body_text()))
            })?;
        Ok(AppPath(value))
    }
}
