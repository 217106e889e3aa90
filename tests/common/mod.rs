#![allow(dead_code)]

use async_trait::async_trait;
use axum::ServiceExt;
use axum::extract::Request;
use axum::http::HeaderValue;
use axum_test::TestServer;
use shrinkit::domain::entities::{NewRedirection, Redirection};
use shrinkit::domain::repositories::RedirectionRepository;
use shrinkit::error::AppError;
use shrinkit::infrastructure::persistence::InMemoryRedirectionRepository;
use shrinkit::routes::app_router;
use shrinkit::state::AppState;
use std::sync::Arc;

pub const BASE_URL: &str = "http://localhost:8080";
pub const ALLOWED_ORIGIN: &str = "https://shrinkit-ashy.vercel.app";
pub const INDEX_FILE: &str = "static/index.html";

/// Storage gateway whose store is always unreachable.
pub struct UnreachableRepository;

#[async_trait]
impl RedirectionRepository for UnreachableRepository {
    async fn insert(&self, _new_redirection: NewRedirection) -> Result<Redirection, AppError> {
        Err(AppError::Storage("connection refused".to_string()))
    }

    async fn find_by_short_code(&self, _code: &str) -> Result<Option<Redirection>, AppError> {
        Err(AppError::Storage("connection refused".to_string()))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Err(AppError::Storage("connection refused".to_string()))
    }
}

/// Server over the production router, path normalization included.
pub fn create_test_server(repository: Arc<dyn RedirectionRepository>) -> TestServer {
    let state = AppState::new(repository, BASE_URL);
    let app = app_router(state, HeaderValue::from_static(ALLOWED_ORIGIN), INDEX_FILE);

    TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap()
}

/// Server backed by a fresh in-memory store, with a handle to that store.
pub fn create_memory_server() -> (TestServer, Arc<InMemoryRedirectionRepository>) {
    let repository = Arc::new(InMemoryRedirectionRepository::new());
    let server = create_test_server(repository.clone());

    (server, repository)
}

pub async fn seed(repository: &InMemoryRedirectionRepository, code: &str, url: &str) {
    repository
        .insert(NewRedirection {
            original_url: url.to_string(),
            short_url: code.to_string(),
            new_url: format!("{BASE_URL}/{code}"),
        })
        .await
        .unwrap();
}
