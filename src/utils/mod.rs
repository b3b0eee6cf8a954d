use actix_web::{web, FromRequest};
use futures_util::future::LocalBoxFuture;
use std::borrow::Cow;
use validator::{Validate, ValidationErrors};

use crate::api::error;

/// Treats an empty string the same as a missing field.
pub fn non_empty(value: Option<&String>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// First message attached to a validation failure, without the field prefix.
pub fn validation_message(errors: &ValidationErrors) -> Cow<'static, str> {
    errors
        .field_errors()
        .into_values()
        .flat_map(|errs| errs.iter())
        .find_map(|err| err.message.clone())
        .unwrap_or_else(|| "Invalid request body".into())
}

pub struct ValidatedJson<T>(pub T);

impl<T> FromRequest for ValidatedJson<T>
where
    T: Validate + serde::de::DeserializeOwned + 'static,
{
    type Error = error::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(
        req: &actix_web::HttpRequest,
        payload: &mut actix_web::dev::Payload,
    ) -> Self::Future {
        let fut = web::Json::<T>::from_request(req, payload);

        Box::pin(async move {
            let json = fut.await.map_err(|e| {
                log::warn!("Rejected JSON body: {}", e);
                error::Error::bad_request("Invalid JSON body")
            })?;
            let model = json.into_inner();
            model.validate().map_err(|e| error::Error::BadRequest(validation_message(&e)))?;
            Ok(ValidatedJson(model))
        })
    }
}
