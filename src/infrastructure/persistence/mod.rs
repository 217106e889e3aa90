//! Repository implementations.
//!
//! - [`PgRedirectionRepository`] - PostgreSQL storage via SQLx
//! - [`InMemoryRedirectionRepository`] - process-local storage for tests and local runs

pub mod memory_redirection_repository;
pub mod pg_redirection_repository;

pub use memory_redirection_repository::InMemoryRedirectionRepository;
pub use pg_redirection_repository::PgRedirectionRepository;
