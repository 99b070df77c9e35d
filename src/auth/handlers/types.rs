/**
 * Authentication Handler Types
 *
 * Request and response types shared across the register, login, logout and
 * current-user handlers.
 */

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registration request
#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterRequest {
    /// User's email address
    #[serde(default)]
    pub email: String,
    /// User's password (hashed before storage, never persisted as-is)
    #[serde(default)]
    pub password: String,
    /// User's display name
    #[serde(default)]
    pub name: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Simple success acknowledgement
#[derive(Serialize, Deserialize, Debug)]
pub struct StatusResponse {
    pub success: bool,
}

/// User information safe to return to clients (no credential hash)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserPayload {
    pub id: Uuid,
    pub email: String,
    /// Display name, falling back to the email's local-part when unset
    pub name: String,
}

/// Login response: acknowledgement plus the bound user
#[derive(Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub success: bool,
    pub user: UserPayload,
}

/// Current-user response
#[derive(Serialize, Deserialize, Debug)]
pub struct MeResponse {
    pub user_id: Uuid,
    pub email: String,
    pub name: String,
}

/// Query parameters on the OAuth callback
#[derive(Deserialize, Debug)]
pub struct CallbackParams {
    pub code: Option<String>,
}
