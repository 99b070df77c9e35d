/**
 * Current User Handler
 *
 * This module implements the handler for GET /api/me, which returns
 * information about the identity bound to the request's session.
 *
 * The identity is re-read by id on every call so the response carries a
 * fresh email and name rather than the values cached in the session token.
 */

use axum::extract::State;
use axum::response::Json;
use sqlx::PgPool;

use crate::auth::handlers::types::MeResponse;
use crate::auth::users::get_user_by_id;
use crate::error::ApiError;
use crate::middleware::SessionUser;

/// Current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - the session is anonymous or invalid
/// * `404 Not Found` - the bound identity has since vanished
pub async fn me(
    session: SessionUser,
    State(pool): State<PgPool>,
) -> Result<Json<MeResponse>, ApiError> {
    let user = get_user_by_id(&pool, session.user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Session bound to vanished user: {}", session.user_id);
            ApiError::NotFound("User not found".to_string())
        })?;

    Ok(Json(MeResponse {
        user_id: user.id,
        email: user.email.clone(),
        name: user.display_name(),
    }))
}
