//! Request extractors shared by the handlers.

use axum::extract::{FromRequest, Request};
use axum::Json;
use gamestore_core::error::CoreError;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON body that has been deserialized and then checked with
/// [`Validate`] before the handler runs.
///
/// Malformed JSON, missing fields, and a wrong content type become
/// [`AppError::BadRequest`]; rule violations become
/// [`CoreError::Validation`]. Both answer `400`.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        value.validate().map_err(CoreError::from)?;

        Ok(Self(value))
    }
}
