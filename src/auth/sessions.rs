/**
 * Session Management
 *
 * This module handles the signed session token that binds a client to an
 * authenticated identity. The token is issued on login (local or federated)
 * and carried in an HttpOnly cookie; a bearer Authorization header is
 * accepted as a fallback for non-browser clients.
 *
 * # Lifecycle
 *
 * Anonymous -> Authenticated on successful login or federated callback,
 * back to Anonymous on logout (cookie cleared) or expiry. A request with no
 * valid token is anonymous and authorizes nothing.
 */

use axum::http::header::{AUTHORIZATION, COOKIE};
use axum::http::HeaderMap;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "session";

/// Sessions last 30 days from issuance
pub const SESSION_TTL_SECS: u64 = 30 * 24 * 60 * 60;

/// Session claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Bound user ID
    pub sub: String,
    /// Bound email
    pub email: String,
    /// Permanence flag; permanent sessions carry the full 30-day expiry
    #[serde(default)]
    pub permanent: bool,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Get the session signing secret from the environment
fn get_session_secret() -> String {
    std::env::var("SESSION_SECRET")
        .unwrap_or_else(|_| "supersecretkey-change-in-production".to_string())
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Create a permanent session token bound to a user
///
/// # Arguments
/// * `user_id` - Bound user ID
/// * `email` - Bound email
pub fn create_session_token(
    user_id: Uuid,
    email: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = unix_now();

    let claims = SessionClaims {
        sub: user_id.to_string(),
        email: email.to_string(),
        permanent: true,
        exp: now + SESSION_TTL_SECS,
        iat: now,
    };

    let secret = get_session_secret();
    let key = EncodingKey::from_secret(secret.as_ref());

    encode(&Header::default(), &claims, &key)
}

/// Verify and decode a session token
pub fn verify_session_token(token: &str) -> Result<SessionClaims, jsonwebtoken::errors::Error> {
    let secret = get_session_secret();
    let key = DecodingKey::from_secret(secret.as_ref());
    let validation = Validation::default();

    let token_data = decode::<SessionClaims>(token, &key, &validation)?;
    Ok(token_data.claims)
}

/// Build the Set-Cookie value that binds a session to the client
pub fn session_cookie(token: &str) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        SESSION_COOKIE, token, SESSION_TTL_SECS
    )
}

/// Build the Set-Cookie value that clears the session
pub fn clear_session_cookie() -> String {
    format!(
        "{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0",
        SESSION_COOKIE
    )
}

/// Extract the session token from request headers
///
/// Checks the session cookie first, then falls back to a bearer
/// Authorization header. Returns `None` for anonymous requests.
pub fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    if let Some(cookies) = headers.get(COOKIE).and_then(|h| h.to_str().ok()) {
        for pair in cookies.split(';') {
            if let Some(value) = pair.trim().strip_prefix("session=") {
                if !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }
    }

    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_create_and_verify_token() {
        let user_id = Uuid::new_v4();
        let token = create_session_token(user_id, "test@example.com").unwrap();
        assert!(!token.is_empty());

        let claims = verify_session_token(&token).unwrap();
        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.email, "test@example.com");
        assert!(claims.permanent);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let now = unix_now();
        let claims = SessionClaims {
            sub: Uuid::new_v4().to_string(),
            email: "stale@example.com".to_string(),
            permanent: true,
            exp: now - 3600,
            iat: now - 7200,
        };
        let key = EncodingKey::from_secret(get_session_secret().as_ref());
        let token = encode(&Header::default(), &claims, &key).unwrap();

        assert!(verify_session_token(&token).is_err());
    }

    #[test]
    fn test_verify_invalid_token() {
        let result = verify_session_token("invalid.token.here");
        assert!(result.is_err());
    }

    #[test]
    fn test_token_from_cookie_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; session=abc123; lang=en"),
        );
        assert_eq!(token_from_headers(&headers), Some("abc123".to_string()));
    }

    #[test]
    fn test_token_from_bearer_header() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer xyz789"));
        assert_eq!(token_from_headers(&headers), Some("xyz789".to_string()));
    }

    #[test]
    fn test_no_token_is_anonymous() {
        let headers = HeaderMap::new();
        assert_eq!(token_from_headers(&headers), None);
    }

    #[test]
    fn test_empty_cookie_value_is_anonymous() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("session="));
        assert_eq!(token_from_headers(&headers), None);
    }

    #[test]
    fn test_clear_cookie_expires_immediately() {
        let cookie = clear_session_cookie();
        assert!(cookie.starts_with("session=;"));
        assert!(cookie.contains("Max-Age=0"));
    }
}
