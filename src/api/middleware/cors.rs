//! Cross-origin policy.

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::CorsLayer;

/// Allows browser calls from exactly one origin.
///
/// Only `GET` and `POST` with a `Content-Type` header are permitted. The
/// origin is validated when configuration is loaded.
pub fn layer(allowed_origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}
