//! Redirection entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A stored mapping between a short code and the original URL.
///
/// Records are created once and never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirection {
    /// Identifier assigned by the store on insert.
    pub id: i64,
    pub original_url: String,
    /// The generated 5-letter short code.
    pub short_url: String,
    /// Fully-qualified short link, `<base-url>/<short_url>`.
    pub new_url: String,
    pub created_at: DateTime<Utc>,
}

impl Redirection {
    pub fn new(
        id: i64,
        original_url: String,
        short_url: String,
        new_url: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            original_url,
            short_url,
            new_url,
            created_at,
        }
    }
}

/// Input data for inserting a new redirection.
///
/// The store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRedirection {
    pub original_url: String,
    pub short_url: String,
    pub new_url: String,
}
