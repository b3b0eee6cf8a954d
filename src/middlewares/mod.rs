use actix_web::{
    body::MessageBody,
    dev::ServiceResponse,
    http::{
        header::{self, HeaderValue},
        StatusCode,
    },
    middleware::{ErrorHandlerResponse, ErrorHandlers},
};

use crate::api::error;

pub const FALLBACK_ERROR_BODY: &str = "Something broke!";

/// Last-resort handler for 500s that did not come from [`error::Error`].
pub fn error_fallback<B>() -> ErrorHandlers<B>
where
    B: MessageBody + 'static,
{
    ErrorHandlers::new().handler(StatusCode::INTERNAL_SERVER_ERROR, internal_error_fallback)
}

fn internal_error_fallback<B>(
    res: ServiceResponse<B>,
) -> actix_web::Result<ErrorHandlerResponse<B>>
where
    B: MessageBody + 'static,
{
    let handled =
        res.response().error().is_some_and(|err| err.as_error::<error::Error>().is_some());
    if handled {
        return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
    }

    match res.response().error() {
        Some(err) => log::error!("Unhandled error on {}: {:?}", res.request().path(), err),
        None => log::error!("Unhandled internal error on {}", res.request().path()),
    }

    let (req, res) = res.into_parts();
    let mut res = res.set_body(FALLBACK_ERROR_BODY.to_string());
    res.headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static("text/plain; charset=utf-8"));

    let res = ServiceResponse::new(req, res).map_into_boxed_body().map_into_right_body();
    Ok(ErrorHandlerResponse::Response(res))
}
