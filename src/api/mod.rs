//! Portal access module.
//!
//! This module provides:
//! - The transport abstraction every request goes through
//! - The cookie-carrying HTTP session
//! - The access gate for password-protected videos

pub mod auth;
pub mod client;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use auth::{is_protected, AccessGate};
pub use client::Session;
pub use transport::Transport;
