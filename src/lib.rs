//! SmartBudget - Main Library
//!
//! SmartBudget is a personal-finance tracking backend built with Rust.
//! It authenticates users (password-based and Google federated login) and
//! records and retrieves expense entries scoped to the authenticated user.
//!
//! # Module Structure
//!
//! ```text
//! src/
//! ├── server/      - Configuration, application state, initialization
//! ├── routes/      - HTTP route configuration and router assembly
//! ├── auth/        - Identity store, sessions, OAuth, auth handlers
//! ├── expenses/    - Expense persistence and handlers
//! ├── middleware/  - Session extraction for protected handlers
//! └── error/       - API error types and HTTP mapping
//! ```
//!
//! # Architecture
//!
//! Two components composed in strict dependency order:
//!
//! - **Identity Store** (`auth::users`) - owns the user identity table,
//!   resolves emails to user records, creates identities and verifies
//!   credentials.
//! - **Session-Scoped Resource API** (`auth::handlers`, `expenses`) -
//!   establishes a session from the Identity Store's verification result
//!   and gates every expense operation behind an authenticated session.
//!
//! State is request-scoped: handlers receive an [`server::state::AppState`]
//! carrying the database pool and OAuth client; there are no process-wide
//! mutable singletons.

/// Identity store, sessions, OAuth and authentication handlers
pub mod auth;

/// API error types
pub mod error;

/// Expense persistence and handlers
pub mod expenses;

/// Session extraction middleware
pub mod middleware;

/// Route configuration
pub mod routes;

/// Server setup and configuration
pub mod server;
