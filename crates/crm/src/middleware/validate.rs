use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use shared::errors::{AppErrorHttp, ServiceError, validation_messages};
use validator::Validate;

/// JSON body that is rejected with a 400 error envelope when it does not parse
/// or fails its `validator` rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for SimpleValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppErrorHttp;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                AppErrorHttp(ServiceError::InvalidArgument(rejection.body_text()))
            })?;

        value
            .validate()
            .map_err(|e| AppErrorHttp(ServiceError::Validation(validation_messages(&e))))?;

        Ok(SimpleValidatedJson(value))
    }
}
