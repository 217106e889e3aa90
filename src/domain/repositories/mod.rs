//! Repository trait definitions for the domain layer.
//!
//! The storage gateway is expressed as the [`RedirectionRepository`] trait.
//! Implementations live in `crate::infrastructure::persistence`; mock
//! implementations are generated via `mockall` for unit tests.

pub mod redirection_repository;

pub use redirection_repository::RedirectionRepository;

#[cfg(test)]
pub use redirection_repository::MockRedirectionRepository;
