//! API Error Types
//!
//! This module defines the error taxonomy used by every handler:
//!
//! - `Validation` - missing or malformed required field (400)
//! - `AlreadyExists` - unique-constraint conflict on registration (409)
//! - `InvalidCredentials` - login failure, enumeration-safe (401)
//! - `Unauthorized` - no or invalid active session (401)
//! - `NotFound` - referenced entity has vanished (404)
//! - `AuthFailure` - federated exchange or response problem (502)
//! - `Database` - storage-layer fault (500, detail never leaks)
//!
//! Errors render as a structured `{"error": "..."}` JSON payload. Internal
//! faults are logged with their diagnostic detail, but the user-visible
//! message never carries the underlying storage error text.

/// Error enum and HTTP response mapping
pub mod types;

/// Conversions from storage-layer errors
pub mod conversion;

pub use types::ApiError;
