//! Handler for short link resolution.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{short_url}`
///
/// # Response
///
/// `303 See Other` with `Location` set to the stored `originalUrl`.
///
/// # Errors
///
/// - `404 URL not found` if no record has this short code.
/// - `500 Error loading data` if the store could not be queried or the
///   stored URL is not a valid header value.
pub async fn redirect_handler(
    Path(short_url): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    see_other(&state, &short_url).await
}

/// `GET /shorten`: the creation path shadows the short code `shorten`, so
/// the lookup runs here with that literal code.
pub async fn shorten_path_redirect_handler(
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    see_other(&state, "shorten").await
}

async fn see_other(state: &AppState, code: &str) -> Result<Response, AppError> {
    let redirection = state
        .redirection_service
        .resolve(code)
        .await
        .map_err(|e| e.into_public("Error loading data"))?;

    let location = HeaderValue::try_from(redirection.original_url).map_err(|e| {
        AppError::internal(format!("Stored URL for {code} is not a header value: {e}"))
            .into_public("Error loading data")
    })?;

    Ok((StatusCode::SEE_OTHER, [(header::LOCATION, location)]).into_response())
}
