//! Helper functions used across the application.
//!
//! - [`code_generator`] - Short code generation

pub mod code_generator;
