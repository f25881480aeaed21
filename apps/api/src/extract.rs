//! Request extraction that reports bad input as `AppError::Validation`, so
//! every 400 carries the same JSON error body.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;
use crate::models::Id;

/// `Json<T>` whose rejections (bad content type, malformed JSON, missing or
/// mistyped fields) become 400 responses.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;
        Ok(ApiJson(value))
    }
}

/// Parses a path segment as an entity id. `what` names the entity in the
/// error message, e.g. "skill".
pub fn parse_id(raw: &str, what: &str) -> Result<Id, AppError> {
    raw.parse::<Id>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::Validation(format!("Invalid {what} ID")))
}
