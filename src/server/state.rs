/**
 * Application State
 *
 * This module defines the state container injected into every handler.
 * All fields are immutable after startup; there is no process-wide mutable
 * state. Sessions are carried entirely by the client's signed cookie, so
 * the state holds only the storage handle, the OAuth client and the
 * frontend origin used for redirects.
 */

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::auth::oauth::GoogleOAuth;

/// Application state shared across request handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,
    /// Google OAuth client
    pub oauth: GoogleOAuth,
    /// Frontend origin for CORS and post-login redirects
    pub frontend_url: String,
}

/// Allow handlers that only touch storage to extract the pool directly
impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db.clone()
    }
}
