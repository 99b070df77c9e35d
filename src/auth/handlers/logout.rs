/**
 * Logout Handler
 *
 * POST /api/logout unconditionally clears the session cookie. The
 * operation is idempotent: calling it with no active session is a no-op
 * success.
 */

use axum::http::header;
use axum::response::{IntoResponse, Json};

use crate::auth::handlers::types::StatusResponse;
use crate::auth::sessions::clear_session_cookie;

/// Logout handler
pub async fn logout() -> impl IntoResponse {
    (
        [(header::SET_COOKIE, clear_session_cookie())],
        Json(StatusResponse { success: true }),
    )
}
