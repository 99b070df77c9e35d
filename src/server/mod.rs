//! Server Setup
//!
//! Configuration loading, application state and server initialization.
//!
//! ```text
//! server/
//! ├── config.rs   - Environment configuration and database connection
//! ├── state.rs    - Application state injected into handlers
//! └── init.rs     - Application assembly
//! ```

/// Environment configuration and database connection
pub mod config;

/// Application assembly
pub mod init;

/// Application state
pub mod state;

pub use init::create_app;
pub use state::AppState;
