//! Identity store integration tests
//!
//! Exercises the storage-level operations directly: conflict detection via
//! the unique constraint, enumeration-safe credential verification and the
//! federated upsert. Tests return early when no test database is reachable.

mod common;

use common::{unique_email, TestDatabase};
use smartbudget::auth::users::{
    create_local_user, get_user_by_email, resolve_or_create_google_user, verify_credentials,
    UserStoreError,
};

#[tokio::test]
async fn test_duplicate_insert_is_a_typed_conflict() {
    let Some(db) = TestDatabase::try_new().await else {
        eprintln!("skipping: no test database");
        return;
    };
    let email = unique_email("store-dup");

    create_local_user(db.pool(), &email, "pw", "A").await.unwrap();
    let second = create_local_user(db.pool(), &email, "pw2", "B").await;
    assert!(matches!(second, Err(UserStoreError::EmailTaken)));
}

#[tokio::test]
async fn test_verify_credentials_failure_paths_match() {
    let Some(db) = TestDatabase::try_new().await else {
        eprintln!("skipping: no test database");
        return;
    };
    let email = unique_email("store-verify");
    create_local_user(db.pool(), &email, "rightpassword", "V").await.unwrap();

    let wrong = verify_credentials(db.pool(), &email, "wrongpassword").await;
    let missing = verify_credentials(db.pool(), "nobody@example.com", "whatever").await;

    assert!(matches!(wrong, Err(UserStoreError::InvalidCredentials)));
    assert!(matches!(missing, Err(UserStoreError::InvalidCredentials)));
}

#[tokio::test]
async fn test_verify_credentials_success() {
    let Some(db) = TestDatabase::try_new().await else {
        eprintln!("skipping: no test database");
        return;
    };
    let email = unique_email("store-ok");
    let created = create_local_user(db.pool(), &email, "password123", "OK").await.unwrap();
    assert!(created.password_hash.is_some());
    assert_ne!(created.password_hash.as_deref(), Some("password123"));

    let verified = verify_credentials(db.pool(), &email, "password123").await.unwrap();
    assert_eq!(verified.id, created.id);
}

#[tokio::test]
async fn test_federated_login_ignores_federated_only_accounts_for_password_login() {
    let Some(db) = TestDatabase::try_new().await else {
        eprintln!("skipping: no test database");
        return;
    };
    let email = unique_email("store-fed");
    resolve_or_create_google_user(db.pool(), &email, "Fed").await.unwrap();

    // Credential lookup is restricted to provider 'email'
    let result = verify_credentials(db.pool(), &email, "anything").await;
    assert!(matches!(result, Err(UserStoreError::InvalidCredentials)));
}

#[tokio::test]
async fn test_federated_upsert_returns_same_id() {
    let Some(db) = TestDatabase::try_new().await else {
        eprintln!("skipping: no test database");
        return;
    };
    let email = unique_email("store-upsert");

    let first = resolve_or_create_google_user(db.pool(), &email, "Name").await.unwrap();
    let second = resolve_or_create_google_user(db.pool(), &email, "Other Name").await.unwrap();
    assert_eq!(first.id, second.id);

    let stored = get_user_by_email(db.pool(), &email).await.unwrap().unwrap();
    assert_eq!(stored.name.as_deref(), Some("Name"), "non-empty name must not be overwritten");
}

#[tokio::test]
async fn test_federated_upsert_backfills_empty_name() {
    let Some(db) = TestDatabase::try_new().await else {
        eprintln!("skipping: no test database");
        return;
    };
    let email = unique_email("store-backfill");

    let created = resolve_or_create_google_user(db.pool(), &email, "").await.unwrap();
    assert!(created.name.as_deref().map_or(true, str::is_empty));

    let updated = resolve_or_create_google_user(db.pool(), &email, "Filled In").await.unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name.as_deref(), Some("Filled In"));
}
