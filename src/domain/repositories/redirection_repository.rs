//! Repository trait for redirection storage.

use crate::domain::entities::{NewRedirection, Redirection};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage gateway for redirection records.
///
/// Implementations must be safe to call concurrently; the HTTP layer adds no
/// locking of its own.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgRedirectionRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::InMemoryRedirectionRepository`] - process-local
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RedirectionRepository: Send + Sync {
    /// Persists a new redirection and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CodeConflict`] if the short code is already stored.
    /// Returns [`AppError::Storage`] if the store is unreachable or rejects the write.
    async fn insert(&self, new_redirection: NewRedirection) -> Result<Redirection, AppError>;

    /// Finds the first redirection whose short code equals `code`.
    ///
    /// Matching is exact and case-sensitive.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on connectivity or decoding errors.
    async fn find_by_short_code(&self, code: &str) -> Result<Option<Redirection>, AppError>;

    /// Counts stored redirections.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
