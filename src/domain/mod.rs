//! Domain layer containing the redirection entity and the storage contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Storage gateway trait, implemented in
//!   [`crate::infrastructure::persistence`]
//!
//! The domain layer has no dependencies on infrastructure or HTTP types.

pub mod entities;
pub mod repositories;
