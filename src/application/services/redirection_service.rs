//! Short link creation and resolution service.

use std::sync::Arc;

use crate::domain::entities::{NewRedirection, Redirection};
use crate::domain::repositories::RedirectionRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;

/// Maximum insert attempts when a generated code is already taken.
const MAX_ATTEMPTS: usize = 10;

/// Service for creating and resolving short links.
///
/// Holds the storage gateway injected at startup and the base URL used to
/// build fully-qualified short links.
pub struct RedirectionService {
    repository: Arc<dyn RedirectionRepository>,
    base_url: String,
}

impl RedirectionService {
    /// Creates a new redirection service.
    ///
    /// A trailing slash on `base_url` is ignored.
    pub fn new(repository: Arc<dyn RedirectionRepository>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            repository,
            base_url,
        }
    }

    /// Creates and stores a new redirection for `original_url`.
    ///
    /// Every call writes a new record with a freshly generated code, even for
    /// a URL that was shortened before. When the generated code is already
    /// stored, a new code is generated and the insert retried.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if no free code was found within
    /// the attempt limit.
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn create(&self, original_url: String) -> Result<Redirection, AppError> {
        for attempt in 1..=MAX_ATTEMPTS {
            let code = generate_code();

            let new_redirection = NewRedirection {
                original_url: original_url.clone(),
                new_url: self.short_url(&code),
                short_url: code,
            };

            match self.repository.insert(new_redirection).await {
                Ok(redirection) => {
                    tracing::info!(code = %redirection.short_url, "Created short link");
                    return Ok(redirection);
                }
                Err(AppError::CodeConflict(detail)) => {
                    tracing::warn!(attempt, %detail, "Short code collision, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal("Failed to generate unique code"))
    }

    /// Retrieves the redirection stored for `code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches the code.
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn resolve(&self, code: &str) -> Result<Redirection, AppError> {
        tracing::debug!(code, "Resolving short link");

        self.repository
            .find_by_short_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("URL not found"))
    }

    /// Builds the fully-qualified short link for `code`.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }
}
