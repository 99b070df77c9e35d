/**
 * Error Conversions
 *
 * Conversions from storage- and OAuth-layer errors into the API error type.
 * The identity store produces typed errors (conflict, invalid credentials)
 * at the point of the operation; this module maps them onto the HTTP-facing
 * taxonomy without losing the distinction.
 */

use crate::auth::oauth::OAuthError;
use crate::auth::users::UserStoreError;
use crate::error::types::ApiError;

impl From<UserStoreError> for ApiError {
    fn from(err: UserStoreError) -> Self {
        match err {
            UserStoreError::EmailTaken => {
                ApiError::AlreadyExists("Email already exists".to_string())
            }
            UserStoreError::InvalidCredentials => ApiError::InvalidCredentials,
            UserStoreError::Database(e) => ApiError::Database(e),
            UserStoreError::Hash(e) => ApiError::Internal(format!("bcrypt failure: {}", e)),
        }
    }
}

impl From<OAuthError> for ApiError {
    fn from(err: OAuthError) -> Self {
        ApiError::AuthFailure(err.to_string())
    }
}
