/**
 * Login Handler
 *
 * This module implements the user authentication handler for
 * POST /api/login.
 *
 * # Authentication Process
 *
 * 1. Verify the credentials against the identity store
 * 2. Issue a permanent session token bound to the user
 * 3. Set the session cookie and return the user info
 *
 * # Security
 *
 * - Unknown email and wrong password return the same 401 response,
 *   preventing user enumeration
 * - Passwords are verified with bcrypt and never logged or returned
 */

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Json};
use sqlx::PgPool;

use crate::auth::handlers::types::{LoginRequest, LoginResponse, UserPayload};
use crate::auth::sessions::{create_session_token, session_cookie};
use crate::auth::users::verify_credentials;
use crate::error::ApiError;

/// Login handler
///
/// On success the response binds a permanent session via a Set-Cookie
/// header and returns the user's id, email and display name (falling back
/// to the email's local-part when the stored name is empty).
///
/// # Errors
///
/// * `400 Bad Request` - email or password missing
/// * `401 Unauthorized` - invalid credentials
pub async fn login(
    State(pool): State<PgPool>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if request.email.trim().is_empty() || request.password.is_empty() {
        return Err(ApiError::Validation(
            "Email and password required".to_string(),
        ));
    }

    let user = verify_credentials(&pool, &request.email, &request.password).await?;

    let token = create_session_token(user.id, &user.email).map_err(|e| {
        ApiError::Internal(format!("failed to create session token: {}", e))
    })?;

    tracing::info!("User logged in: {}", user.email);

    let body = LoginResponse {
        success: true,
        user: UserPayload {
            id: user.id,
            email: user.email.clone(),
            name: user.display_name(),
        },
    };

    Ok(([(header::SET_COOKIE, session_cookie(&token))], Json(body)))
}
