//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! - [`services::redirection_service::RedirectionService`] - Short link creation and resolution

pub mod services;
