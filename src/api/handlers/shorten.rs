//! Handler for the link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::{RedirectionResponse, ShortenRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Body returned for any unreadable or invalid request.
const INVALID_BODY: &str = "Invalid request body";

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "originalUrl": "https://example.com" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "id": 1,
///   "originalUrl": "https://example.com",
///   "shortUrl": "aBcDe",
///   "newUrl": "http://localhost:8080/aBcDe",
///   "createdAt": "2025-01-01T12:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// - `400 Invalid request body` if the body is not JSON, lacks `originalUrl`,
///   or `originalUrl` is empty. Nothing is written.
/// - `500 Error saving data` if the record could not be stored.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RedirectionResponse>), AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!(%rejection, "Rejected shorten request body");
        AppError::bad_request(INVALID_BODY)
    })?;

    payload
        .validate()
        .map_err(|_| AppError::bad_request(INVALID_BODY))?;

    let redirection = state
        .redirection_service
        .create(payload.original_url)
        .await
        .map_err(|e| e.into_public("Error saving data"))?;

    Ok((StatusCode::CREATED, Json(redirection.into())))
}
