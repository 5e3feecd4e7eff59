//! Shared Middleware Stack
//!
//! Applied once around the whole router so API and static responses behave
//! the same way.

use axum::{
    body::Body,
    http::{header, HeaderValue, Request},
    middleware::{self, Next},
    response::Response,
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::config::ServerSettings;

/// Apply security headers, compression and request tracing according to `settings`.
pub fn apply_middleware(router: Router, settings: &ServerSettings) -> Router {
    let mut router = router;

    if settings.security_headers {
        router = router.layer(middleware::from_fn(security_headers_middleware));
    }

    if settings.compression {
        router = router.layer(CompressionLayer::new());
    }

    // Tracing (outermost)
    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    )
}

async fn security_headers_middleware(request: Request<Body>, next: Next) -> Response {
    let mut response = next.run(request).await;

    let headers = response.headers_mut();
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );

    response
}
