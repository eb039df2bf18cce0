use axum::{
  extract::{rejection::JsonRejection, FromRequest, Request},
  Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use super::error::AppError;

/// JSON body extractor that reports every binding or validation failure as a 400.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
  T: DeserializeOwned + Validate,
  S: Send + Sync,
  Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
  type Rejection = AppError;

  async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
    let Json(value) = Json::<T>::from_request(req, state)
      .await
      .map_err(|rejection| AppError::bad_request(rejection.body_text()))?;

    value.validate()?;

    Ok(ValidatedJson(value))
  }
}
