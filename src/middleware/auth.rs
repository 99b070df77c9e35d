/**
 * Session Extraction
 *
 * This module provides the capability check performed at the start of each
 * resource-scoped operation. Handlers that require an authenticated
 * session take a `SessionUser` parameter; extraction fails with a typed
 * `Unauthorized` error when the session is anonymous, invalid or expired.
 *
 * This is the single authorization gate: there is no per-resource
 * ownership check beyond filtering by the bound user id.
 */

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use crate::auth::sessions::{token_from_headers, verify_session_token};
use crate::error::ApiError;

/// The authenticated identity bound to the request's session
#[derive(Clone, Debug)]
pub struct SessionUser {
    pub user_id: Uuid,
    pub email: String,
}

impl<S> FromRequestParts<S> for SessionUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = token_from_headers(&parts.headers).ok_or_else(|| {
            tracing::warn!("Request without session token");
            ApiError::Unauthorized
        })?;

        let claims = verify_session_token(&token).map_err(|e| {
            tracing::warn!("Invalid session token: {:?}", e);
            ApiError::Unauthorized
        })?;

        // A session that does not bind a parseable user id authorizes nothing
        let user_id = Uuid::parse_str(&claims.sub).map_err(|e| {
            tracing::warn!("Session token with malformed user id: {:?}", e);
            ApiError::Unauthorized
        })?;

        Ok(SessionUser {
            user_id,
            email: claims.email,
        })
    }
}
