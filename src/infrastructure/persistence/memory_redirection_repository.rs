//! In-memory implementation of the redirection repository.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::{NewRedirection, Redirection};
use crate::domain::repositories::RedirectionRepository;
use crate::error::AppError;

#[derive(Debug, Default)]
struct Store {
    next_id: i64,
    by_code: HashMap<String, Redirection>,
}

/// Process-local redirection storage.
///
/// Mirrors the PostgreSQL repository: identifiers are assigned sequentially
/// starting at 1, `created_at` is set on insert, and duplicate short codes are
/// rejected. Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryRedirectionRepository {
    store: RwLock<Store>,
}

impl InMemoryRedirectionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RedirectionRepository for InMemoryRedirectionRepository {
    async fn insert(&self, new_redirection: NewRedirection) -> Result<Redirection, AppError> {
        let mut store = self.store.write().await;

        if store.by_code.contains_key(&new_redirection.short_url) {
            return Err(AppError::CodeConflict(new_redirection.short_url));
        }

        store.next_id += 1;
        let redirection = Redirection::new(
            store.next_id,
            new_redirection.original_url,
            new_redirection.short_url,
            new_redirection.new_url,
            Utc::now(),
        );

        store
            .by_code
            .insert(redirection.short_url.clone(), redirection.clone());

        Ok(redirection)
    }

    async fn find_by_short_code(&self, code: &str) -> Result<Option<Redirection>, AppError> {
        Ok(self.store.read().await.by_code.get(code).cloned())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.store.read().await.by_code.len() as i64)
    }
}
