//! Authentication test helpers

use axum::http::header::COOKIE;
use axum::http::{HeaderName, HeaderValue};
use sqlx::PgPool;
use uuid::Uuid;

use smartbudget::auth::sessions::create_session_token;
use smartbudget::auth::users::{create_local_user, User};

/// A unique email so test runs never collide
pub fn unique_email(prefix: &str) -> String {
    format!("{}-{}@example.com", prefix, Uuid::new_v4())
}

/// Create a local-password test user
pub async fn create_test_user(pool: &PgPool, email: &str, password: &str, name: &str) -> User {
    create_local_user(pool, email, password, name)
        .await
        .expect("Failed to create test user")
}

/// Build the request Cookie header that binds a session to `user`
pub fn session_cookie_header(user: &User) -> (HeaderName, HeaderValue) {
    let token = create_session_token(user.id, &user.email).expect("Failed to create token");
    let value = HeaderValue::from_str(&format!("session={}", token)).unwrap();
    (COOKIE, value)
}
