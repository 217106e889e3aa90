//! Core domain entities.
//!
//! - [`Redirection`] - A stored mapping from a short code to an original URL
//! - [`NewRedirection`] - Input for inserting a redirection

pub mod redirection;

pub use redirection::{NewRedirection, Redirection};
