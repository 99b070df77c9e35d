//! Authentication Module
//!
//! This module handles user identities, sessions and login flows.
//!
//! # Architecture
//!
//! ```text
//! auth/
//! ├── users.rs     - Identity store: user model and database operations
//! ├── sessions.rs  - Signed session tokens and cookie handling
//! ├── oauth.rs     - Google authorization-code exchange client
//! └── handlers/    - HTTP handlers for auth endpoints
//! ```
//!
//! # Authentication Flows
//!
//! 1. **Register**: email/password/name -> identity created (provider
//!    `email`), duplicate emails rejected via the unique constraint
//! 2. **Login**: credentials verified -> permanent session cookie bound
//! 3. **Federated**: Google code exchange -> identity resolved or created
//!    (provider `google`) -> permanent session cookie bound
//!
//! # Security
//!
//! - Passwords are bcrypt-hashed before storage
//! - Invalid credentials return an enumeration-safe 401
//! - Session tokens are signed and expire after 30 days

/// Identity store: user model and database operations
pub mod users;

/// Signed session tokens and cookie handling
pub mod sessions;

/// Google OAuth client
pub mod oauth;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{google_callback, google_login, login, logout, me, register};
pub use users::{User, UserStoreError};
