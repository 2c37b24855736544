use std::time::Duration;

use axum::{
    Json, Router,
    http::{HeaderName, Request, Response, StatusCode, Uri},
    response::Redirect,
    routing::get,
};
use tower::limit::ConcurrencyLimitLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::{
    middleware::catch_panic::catch_panic_layer,
    response::MessageBody,
    routes::{
        create_api_router,
        doc::{DOCS_PATH, scalar_docs},
        health,
    },
    state::AppState,
};

const REQUEST_ID_HEADER: &str = "x-request-id";
const MAX_IN_FLIGHT_REQUESTS: usize = 100;
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Full application: routes, docs, and the middleware stack.
pub fn create_app(state: AppState) -> Router {
    let request_id_header = HeaderName::from_static(REQUEST_ID_HEADER);
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<_>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = %request_id(request)
            )
        })
        .on_request(|request: &Request<_>, _span: &tracing::Span| {
            tracing::info!(
                request_id = %request_id(request),
                method = %request.method(),
                uri = %request.uri(),
                "request started"
            );
        })
        .on_response(|response: &Response<_>, latency: Duration, _span: &tracing::Span| {
            tracing::info!(
                status = %response.status(),
                ms = %latency.as_millis(),
                "request finished"
            );
        });

    Router::new()
        .route("/", get(|| async { Redirect::temporary(DOCS_PATH) }))
        .route("/health", get(health::health_check))
        .merge(create_api_router())
        .merge(scalar_docs())
        .fallback(not_found)
        .layer(catch_panic_layer())
        .layer(trace_layer)
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(ConcurrencyLimitLayer::new(MAX_IN_FLIGHT_REQUESTS))
        .with_state(state)
}

fn request_id<B>(request: &Request<B>) -> &str {
    request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-")
}

async fn not_found(uri: Uri) -> (StatusCode, Json<MessageBody>) {
    tracing::debug!(path = %uri.path(), "no route");
    (StatusCode::NOT_FOUND, Json(MessageBody::new("Not Found")))
}
