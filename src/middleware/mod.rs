//! Request Middleware
//!
//! Session extraction for protected handlers.

/// Authenticated-session extractor
pub mod auth;

pub use auth::SessionUser;
