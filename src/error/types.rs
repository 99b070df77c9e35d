/**
 * API Error Types
 *
 * This module defines the error type returned by HTTP handlers and its
 * conversion to an HTTP response.
 *
 * # Error Categories
 *
 * Local validation and session checks fail before touching storage and map
 * to 4xx codes. Storage conflicts are translated to the matching domain
 * error at the point of the operation; unexpected storage faults propagate
 * as `Database` and surface as an opaque 500.
 */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while handling an API request
///
/// Each variant maps to an HTTP status code via [`ApiError::status_code`],
/// and to a short user-visible message via the `Display` implementation.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed required field
    #[error("{0}")]
    Validation(String),

    /// Unique-constraint conflict (e.g. registering an existing email)
    #[error("{0}")]
    AlreadyExists(String),

    /// Login failure. Unknown email and wrong password are deliberately
    /// indistinguishable to prevent user enumeration.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No active session, or the session token is invalid or expired
    #[error("Unauthorized")]
    Unauthorized,

    /// Referenced entity no longer exists
    #[error("{0}")]
    NotFound(String),

    /// Federated login exchange or response problem
    #[error("Authentication failed")]
    AuthFailure(String),

    /// Storage-layer fault. The sqlx detail is logged but never returned
    /// to the client.
    #[error("Internal server error")]
    Database(#[from] sqlx::Error),

    /// Unexpected internal fault (hashing, token signing)
    #[error("Internal server error")]
    Internal(String),
}

/// Structured error payload returned to clients
#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub error: String,
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::AlreadyExists(_) => StatusCode::CONFLICT,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::AuthFailure(_) => StatusCode::BAD_GATEWAY,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
            }
            ApiError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
            }
            ApiError::AuthFailure(detail) => {
                tracing::warn!("Federated auth failure: {}", detail);
            }
            _ => {}
        }

        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
