use actix_web::{http::header::ContentType, http::StatusCode, HttpResponse};
use std::borrow::Cow;

/// Acknowledgement payload for operations that return no entity.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct Ack {
    pub message: Cow<'static, str>,
}

impl Ack {
    pub fn new(msg: impl Into<Cow<'static, str>>) -> Self {
        Self { message: msg.into() }
    }
}

pub enum Body<T: serde::Serialize> {
    Json(T),
    Text(Cow<'static, str>),
}

pub struct Success<T: serde::Serialize> {
    pub status: StatusCode,
    pub body: Body<T>,
}

impl<T: serde::Serialize> Success<T> {
    pub fn ok(data: T) -> Self {
        Self { status: StatusCode::OK, body: Body::Json(data) }
    }

    pub fn created(data: T) -> Self {
        Self { status: StatusCode::CREATED, body: Body::Json(data) }
    }
}

impl Success<()> {
    pub fn text<M>(msg: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        Self { status: StatusCode::OK, body: Body::Text(msg.into()) }
    }
}

impl<T: serde::Serialize> actix_web::Responder for Success<T> {
    type Body = actix_web::body::BoxBody;

    fn respond_to(self, _req: &actix_web::HttpRequest) -> HttpResponse<Self::Body> {
        let mut response = HttpResponse::build(self.status);

        match self.body {
            Body::Json(data) => response.json(data),
            Body::Text(msg) => {
                response.content_type(ContentType::plaintext()).body(msg.into_owned())
            }
        }
    }
}
