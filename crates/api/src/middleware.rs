use axum::{
    http::{HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;

use crate::context::RequestContext;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Resolve a [`RequestContext`], run the request inside a span carrying its id,
/// and echo the id back in the `x-request-id` response header.
///
/// Handlers do not see the context; everything they log inherits the span.
pub async fn request_context(req: Request<axum::body::Body>, next: Next) -> Response {
    let ctx = RequestContext::from_headers(req.headers());
    let span = tracing::info_span!(
        "request",
        request_id = %ctx.request_id(),
        method = %req.method(),
        path = %req.uri().path(),
    );

    let mut response = next.run(req).instrument(span.clone()).await;

    span.in_scope(|| {
        tracing::info!(status = response.status().as_u16(), "request completed");
    });

    if let Ok(value) = HeaderValue::from_str(ctx.request_id()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
