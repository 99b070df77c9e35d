/**
 * Registration Handler
 *
 * This module implements the user registration handler for
 * POST /api/register.
 *
 * # Registration Process
 *
 * 1. Validate that email, password and name are present
 * 2. Hash the password and insert the identity (provider `email`)
 * 3. Translate a unique-constraint conflict to 409
 *
 * There is deliberately no existence pre-check: the duplicate email is
 * detected from the insert's unique-constraint violation, so concurrent
 * registrations of the same email cannot both succeed.
 */

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use sqlx::PgPool;

use crate::auth::handlers::types::{RegisterRequest, StatusResponse};
use crate::auth::users::create_local_user;
use crate::error::ApiError;

/// Registration handler
///
/// # Errors
///
/// * `400 Bad Request` - a required field is missing
/// * `409 Conflict` - an identity with this email already exists
/// * `500 Internal Server Error` - hashing or persistence fault
pub async fn register(
    State(pool): State<PgPool>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<StatusResponse>), ApiError> {
    if request.email.trim().is_empty()
        || request.password.is_empty()
        || request.name.trim().is_empty()
    {
        return Err(ApiError::Validation(
            "Name, email and password are required".to_string(),
        ));
    }

    let user = create_local_user(&pool, &request.email, &request.password, &request.name).await?;

    tracing::info!("User registered: {} ({})", user.display_name(), user.email);

    Ok((StatusCode::CREATED, Json(StatusResponse { success: true })))
}
