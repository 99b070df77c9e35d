//! Route Configuration
//!
//! Router assembly and API route wiring.

/// API route wiring
pub mod api_routes;

/// Router assembly
pub mod router;

pub use router::create_router;
