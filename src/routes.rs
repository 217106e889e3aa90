//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`              - Static landing page
//! - `POST /shorten`       - Create a short link
//! - `GET  /shorten`       - Lookup of the literal code `shorten`
//! - `GET  /{short_url}`   - Short link redirect
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Single allowed origin
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{redirect_handler, shorten_handler, shorten_path_redirect_handler};
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use std::path::Path;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeFile;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `allowed_origin` - the only origin permitted to call the API from a browser
/// - `index_file` - landing page served at `/`
pub fn app_router(
    state: AppState,
    allowed_origin: HeaderValue,
    index_file: impl AsRef<Path>,
) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, allowed_origin, index_file))
}

/// Routes and per-request middleware, without path normalization.
fn router(state: AppState, allowed_origin: HeaderValue, index_file: impl AsRef<Path>) -> Router {
    Router::new()
        .route_service("/", ServeFile::new(index_file))
        .route(
            "/shorten",
            post(shorten_handler).get(shorten_path_redirect_handler),
        )
        .route("/{short_url}", get(redirect_handler))
        .with_state(state)
        .layer(cors::layer(allowed_origin))
        .layer(tracing::layer())
}
