use std::any::Any;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tower_http::catch_panic::CatchPanicLayer;

use crate::{error::INTERNAL_ERROR_MESSAGE, response::MessageBody};

pub type PanicHandler = fn(Box<dyn Any + Send + 'static>) -> Response;

/// Turns a panic anywhere below it into an opaque 500.
pub fn catch_panic_layer() -> CatchPanicLayer<PanicHandler> {
    CatchPanicLayer::custom(handle_panic as PanicHandler)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!(panic = %detail, "request handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(MessageBody::new(INTERNAL_ERROR_MESSAGE)),
    )
        .into_response()
}
