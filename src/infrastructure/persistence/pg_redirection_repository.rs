//! PostgreSQL implementation of the redirection repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewRedirection, Redirection};
use crate::domain::repositories::RedirectionRepository;
use crate::error::AppError;

/// Row shape of the `redirections` table.
#[derive(Debug, sqlx::FromRow)]
struct RedirectionRow {
    id: i64,
    original_url: String,
    short_url: String,
    new_url: String,
    created_at: DateTime<Utc>,
}

impl From<RedirectionRow> for Redirection {
    fn from(row: RedirectionRow) -> Self {
        Redirection::new(
            row.id,
            row.original_url,
            row.short_url,
            row.new_url,
            row.created_at,
        )
    }
}

/// PostgreSQL repository for redirection storage and lookup.
///
/// Holds the process-wide connection pool. The pool is safe to share across
/// concurrent requests.
pub struct PgRedirectionRepository {
    pool: Arc<PgPool>,
}

impl PgRedirectionRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RedirectionRepository for PgRedirectionRepository {
    async fn insert(&self, new_redirection: NewRedirection) -> Result<Redirection, AppError> {
        let row = sqlx::query_as::<_, RedirectionRow>(
            r#"
            INSERT INTO redirections (original_url, short_url, new_url)
            VALUES ($1, $2, $3)
            RETURNING id, original_url, short_url, new_url, created_at
            "#,
        )
        .bind(&new_redirection.original_url)
        .bind(&new_redirection.short_url)
        .bind(&new_redirection.new_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_short_code(&self, code: &str) -> Result<Option<Redirection>, AppError> {
        let row = sqlx::query_as::<_, RedirectionRow>(
            r#"
            SELECT id, original_url, short_url, new_url, created_at
            FROM redirections
            WHERE short_url = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Redirection::from))
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM redirections")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
