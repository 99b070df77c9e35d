//! Common test utilities and helpers
//!
//! Shared fixtures for the integration tests: database setup and
//! authentication helpers.

// Each test binary uses its own subset of these helpers.
#![allow(dead_code)]

pub mod auth_helpers;
pub mod database;
pub mod server;

pub use auth_helpers::*;
pub use database::*;
pub use server::*;
