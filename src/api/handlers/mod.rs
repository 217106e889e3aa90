//! HTTP request handlers.

pub mod redirect;
pub mod shorten;

pub use redirect::{redirect_handler, shorten_path_redirect_handler};
pub use shorten::shorten_handler;
