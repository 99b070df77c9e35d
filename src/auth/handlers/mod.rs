//! Authentication Handlers
//!
//! HTTP handlers for the authentication endpoints.
//!
//! ```text
//! handlers/
//! ├── types.rs     - Request and response types
//! ├── register.rs  - POST /api/register
//! ├── login.rs     - POST /api/login
//! ├── logout.rs    - POST /api/logout
//! ├── me.rs        - GET /api/me
//! └── google.rs    - GET /auth/google, GET /auth/google/callback
//! ```

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Logout handler
pub mod logout;

/// Current user handler
pub mod me;

/// Google federated login handlers
pub mod google;

pub use types::{LoginRequest, LoginResponse, MeResponse, RegisterRequest, StatusResponse, UserPayload};

pub use google::{google_callback, google_login};
pub use login::login;
pub use logout::logout;
pub use me::me;
pub use register::register;
