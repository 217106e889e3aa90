//! Data Transfer Objects for API requests and responses.
//!
//! JSON field names are camelCase.

pub mod redirection;

pub use redirection::{RedirectionResponse, ShortenRequest};
