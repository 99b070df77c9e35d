//! Authentication API integration tests
//!
//! Covers registration conflicts, enumeration-safe login failures,
//! the current-user endpoint and logout idempotence. Tests return early
//! when no test database is reachable.

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use common::{create_test_user, session_cookie_header, test_server, unique_email, TestDatabase};

#[tokio::test]
async fn test_register_success() {
    let Some(db) = TestDatabase::try_new().await else {
        eprintln!("skipping: no test database");
        return;
    };
    let server = test_server(db.pool().clone());

    let response = server
        .post("/api/register")
        .json(&serde_json::json!({
            "email": unique_email("register"),
            "password": "password123",
            "name": "Test User"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn test_register_missing_fields() {
    let Some(db) = TestDatabase::try_new().await else {
        eprintln!("skipping: no test database");
        return;
    };
    let server = test_server(db.pool().clone());

    let response = server
        .post("/api/register")
        .json(&serde_json::json!({
            "email": unique_email("incomplete"),
            "password": "password123"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let Some(db) = TestDatabase::try_new().await else {
        eprintln!("skipping: no test database");
        return;
    };
    let server = test_server(db.pool().clone());
    let email = unique_email("duplicate");

    let first = server
        .post("/api/register")
        .json(&serde_json::json!({
            "email": email,
            "password": "pw",
            "name": "A"
        }))
        .await;
    assert_eq!(first.status_code(), StatusCode::CREATED);

    // Different password and name must not matter
    let second = server
        .post("/api/register")
        .json(&serde_json::json!({
            "email": email,
            "password": "pw2",
            "name": "B"
        }))
        .await;
    assert_eq!(second.status_code(), StatusCode::CONFLICT);
    let body: serde_json::Value = second.json();
    assert_eq!(body["error"], "Email already exists");
}

#[tokio::test]
async fn test_login_success_binds_session() {
    let Some(db) = TestDatabase::try_new().await else {
        eprintln!("skipping: no test database");
        return;
    };
    let server = test_server(db.pool().clone());
    let email = unique_email("login");
    let user = create_test_user(db.pool(), &email, "password123", "Alice").await;

    let response = server
        .post("/api/login")
        .json(&serde_json::json!({
            "email": email,
            "password": "password123"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let set_cookie = response
        .headers()
        .get(axum::http::header::SET_COOKIE)
        .expect("login must bind a session cookie")
        .to_str()
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with("session="));
    assert!(set_cookie.contains("HttpOnly"));

    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["user"]["id"], serde_json::json!(user.id));
    assert_eq!(body["user"]["name"], "Alice");
}

#[tokio::test]
async fn test_login_name_falls_back_to_email_local_part() {
    let Some(db) = TestDatabase::try_new().await else {
        eprintln!("skipping: no test database");
        return;
    };
    let server = test_server(db.pool().clone());
    let email = unique_email("noname");
    // Identity store requires a name on registration, so blank it directly
    let user = create_test_user(db.pool(), &email, "password123", "placeholder").await;
    sqlx::query("UPDATE users SET name = NULL WHERE id = $1")
        .bind(user.id)
        .execute(db.pool())
        .await
        .unwrap();

    let response = server
        .post("/api/login")
        .json(&serde_json::json!({
            "email": email,
            "password": "password123"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    let expected = email.split('@').next().unwrap();
    assert_eq!(body["user"]["name"], expected);
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let Some(db) = TestDatabase::try_new().await else {
        eprintln!("skipping: no test database");
        return;
    };
    let server = test_server(db.pool().clone());
    let email = unique_email("enum");
    create_test_user(db.pool(), &email, "rightpassword", "User").await;

    let wrong_password = server
        .post("/api/login")
        .json(&serde_json::json!({
            "email": email,
            "password": "wrongpassword"
        }))
        .await;

    let unknown_email = server
        .post("/api/login")
        .json(&serde_json::json!({
            "email": unique_email("nonexistent"),
            "password": "whatever"
        }))
        .await;

    // The two failure paths must be observably identical
    assert_eq!(wrong_password.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status_code(), StatusCode::UNAUTHORIZED);
    let body_a: serde_json::Value = wrong_password.json();
    let body_b: serde_json::Value = unknown_email.json();
    assert_eq!(body_a, body_b);
}

#[tokio::test]
async fn test_me_requires_session() {
    let Some(db) = TestDatabase::try_new().await else {
        eprintln!("skipping: no test database");
        return;
    };
    let server = test_server(db.pool().clone());

    let response = server.get("/api/me").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_returns_fresh_identity() {
    let Some(db) = TestDatabase::try_new().await else {
        eprintln!("skipping: no test database");
        return;
    };
    let server = test_server(db.pool().clone());
    let email = unique_email("me");
    let user = create_test_user(db.pool(), &email, "password123", "Old Name").await;
    let (name, value) = session_cookie_header(&user);

    // Rename after the session was bound; /api/me must re-read by id
    sqlx::query("UPDATE users SET name = 'New Name' WHERE id = $1")
        .bind(user.id)
        .execute(db.pool())
        .await
        .unwrap();

    let response = server.get("/api/me").add_header(name, value).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["user_id"], serde_json::json!(user.id));
    assert_eq!(body["email"], email);
    assert_eq!(body["name"], "New Name");
}

#[tokio::test]
async fn test_me_vanished_identity_is_not_found() {
    let Some(db) = TestDatabase::try_new().await else {
        eprintln!("skipping: no test database");
        return;
    };
    let server = test_server(db.pool().clone());
    let email = unique_email("vanished");
    let user = create_test_user(db.pool(), &email, "password123", "Ghost").await;
    let (name, value) = session_cookie_header(&user);

    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user.id)
        .execute(db.pool())
        .await
        .unwrap();

    let response = server.get("/api/me").add_header(name, value).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_logout_is_idempotent() {
    let Some(db) = TestDatabase::try_new().await else {
        eprintln!("skipping: no test database");
        return;
    };
    let server = test_server(db.pool().clone());

    // No active session at all: still a success
    let response = server.post("/api/logout").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);

    let set_cookie = response
        .headers()
        .get(axum::http::header::SET_COOKIE)
        .expect("logout must clear the session cookie")
        .to_str()
        .unwrap();
    assert!(set_cookie.contains("Max-Age=0"));

    // And again
    let again = server.post("/api/logout").await;
    assert_eq!(again.status_code(), StatusCode::OK);
}
