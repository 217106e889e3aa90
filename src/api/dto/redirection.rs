//! DTOs for the link shortening endpoint.

use axum::http::HeaderValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::Redirection;

/// Request to shorten a URL.
///
/// Only `originalUrl` is read. Other redirection fields a client may send
/// (`shortUrl`, `newUrl`, ...) are ignored; the server always generates them.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    /// Destination URL. Not checked for well-formedness; it only has to be
    /// present and usable as a `Location` header.
    #[validate(length(min = 1), custom(function = "validate_location"))]
    pub original_url: String,
}

/// Rejects URLs that cannot be sent back in a `Location` header, such as
/// ones containing control characters.
fn validate_location(url: &str) -> Result<(), ValidationError> {
    HeaderValue::from_str(url)
        .map(|_| ())
        .map_err(|_| ValidationError::new("location"))
}

/// A stored redirection as returned to clients.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedirectionResponse {
    pub id: i64,
    pub original_url: String,
    pub short_url: String,
    pub new_url: String,
    pub created_at: DateTime<Utc>,
}

impl From<Redirection> for RedirectionResponse {
    fn from(redirection: Redirection) -> Self {
        Self {
            id: redirection.id,
            original_url: redirection.original_url,
            short_url: redirection.short_url,
            new_url: redirection.new_url,
            created_at: redirection.created_at,
        }
    }
}
