//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::RedirectionService;
use crate::domain::repositories::RedirectionRepository;

/// State shared by all request handlers.
///
/// Cheap to clone; the service and its storage gateway are behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub redirection_service: Arc<RedirectionService>,
}

impl AppState {
    /// Wires the storage gateway into a fresh service.
    pub fn new(repository: Arc<dyn RedirectionRepository>, base_url: impl Into<String>) -> Self {
        Self {
            redirection_service: Arc::new(RedirectionService::new(repository, base_url)),
        }
    }
}
