//! Application error type and its HTTP mapping.
//!
//! Every failure is handled at the HTTP boundary: [`AppError`] implements
//! [`IntoResponse`] and renders a status code with a short plain-text body.
//! Storage details are logged but never sent to the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Name of the unique constraint on `redirections.short_url`.
pub const SHORT_URL_CONSTRAINT: &str = "redirections_short_url_key";

/// Errors produced by the storage gateway, services, and handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed input. The message is returned to the client as-is.
    #[error("{0}")]
    BadRequest(String),

    /// No record matched the lookup. The message is returned to the client as-is.
    #[error("{0}")]
    NotFound(String),

    /// A record with the same short code already exists.
    #[error("Short code already in use: {0}")]
    CodeConflict(String),

    /// The store is unreachable or rejected the operation.
    #[error("Storage failure: {0}")]
    Storage(String),

    /// Server-side failure with a client-facing message.
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Replaces storage-level failures with a fixed client-facing message.
    ///
    /// Client errors (`BadRequest`, `NotFound`) pass through unchanged so the
    /// handler can keep its own wording for them. The original error is logged.
    pub fn into_public(self, message: &str) -> Self {
        match self {
            AppError::Storage(_) | AppError::CodeConflict(_) | AppError::Internal(_) => {
                tracing::error!(error = %self, "{}", message);
                AppError::Internal(message.to_string())
            }
            other => other,
        }
    }

    /// HTTP status code corresponding to this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::CodeConflict(_) | AppError::Storage(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match self {
            AppError::BadRequest(message)
            | AppError::NotFound(message)
            | AppError::Internal(message) => message,
            AppError::CodeConflict(_) | AppError::Storage(_) => {
                tracing::error!(error = %self, "Unhandled storage error");
                "Internal server error".to_string()
            }
        };

        (status, body).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db_err) = e.as_database_error()
            && db_err.is_unique_violation()
            && db_err.constraint() == Some(SHORT_URL_CONSTRAINT)
        {
            return AppError::CodeConflict(db_err.message().to_string());
        }

        AppError::Storage(e.to_string())
    }
}
