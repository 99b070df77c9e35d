/**
 * User Model and Identity Store Operations
 *
 * This module owns the user identity table. It resolves emails to user
 * records, creates identities (local-password or Google-federated) and
 * verifies credentials.
 *
 * # Invariants
 *
 * - The email is unique across all identities regardless of provider.
 * - A federated identity may lack a password hash.
 * - Duplicate registration is detected by catching the unique-constraint
 *   violation at insert time, not by a check-then-act pre-read.
 */

use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

/// Auth provider tag for local password accounts
pub const PROVIDER_EMAIL: &str = "email";
/// Auth provider tag for Google-federated accounts
pub const PROVIDER_GOOGLE: &str = "google";

/// Errors produced by the identity store
///
/// `EmailTaken` is the dedicated conflict variant raised when the database
/// reports a unique-constraint violation during insertion.
#[derive(Debug, Error)]
pub enum UserStoreError {
    /// An identity with this email already exists
    #[error("email already exists")]
    EmailTaken,

    /// Unknown email or wrong password; the two are indistinguishable
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Underlying storage fault
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// Password hashing or verification fault
    #[error(transparent)]
    Hash(#[from] bcrypt::BcryptError),
}

/// User struct representing an identity in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// User email address (unique)
    pub email: String,
    /// Hashed password (bcrypt); present only for local accounts
    pub password_hash: Option<String>,
    /// Display name; may be empty or absent
    pub name: Option<String>,
    /// Authentication provider tag (`email` or `google`)
    pub auth_provider: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Display name, falling back to the email's local-part when the
    /// stored name is empty or absent.
    pub fn display_name(&self) -> String {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self
                .email
                .split('@')
                .next()
                .unwrap_or(&self.email)
                .to_string(),
        }
    }
}

const USER_COLUMNS: &str = "id, email, password_hash, name, auth_provider, created_at";

/// Returns true when the error is a unique-constraint violation.
fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => db.is_unique_violation(),
        _ => false,
    }
}

/// Create a new local-password identity
///
/// The password is bcrypt-hashed before persistence. A duplicate email is
/// reported as `UserStoreError::EmailTaken`, detected from the database's
/// unique-constraint violation so concurrent registrations cannot race
/// past a pre-check.
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `email` - User email (must be unique)
/// * `password` - Plain-text password; hashed here, never stored
/// * `name` - Display name
pub async fn create_local_user(
    pool: &PgPool,
    email: &str,
    password: &str,
    name: &str,
) -> Result<User, UserStoreError> {
    let id = Uuid::new_v4();
    let now = Utc::now();
    let password_hash = hash(password, DEFAULT_COST)?;

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, email, password_hash, name, auth_provider, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, email, password_hash, name, auth_provider, created_at
        "#,
    )
    .bind(id)
    .bind(email)
    .bind(&password_hash)
    .bind(name)
    .bind(PROVIDER_EMAIL)
    .bind(now)
    .fetch_one(pool)
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            UserStoreError::EmailTaken
        } else {
            UserStoreError::Database(e)
        }
    })?;

    Ok(user)
}

/// Verify a local account's credentials
///
/// The lookup is restricted to `auth_provider = 'email'`. A missing
/// identity, a missing stored hash and a mismatched password all return
/// `InvalidCredentials` - the paths are observably identical to the caller.
pub async fn verify_credentials(
    pool: &PgPool,
    email: &str,
    password: &str,
) -> Result<User, UserStoreError> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, name, auth_provider, created_at
        FROM users
        WHERE email = $1 AND auth_provider = $2
        "#,
    )
    .bind(email)
    .bind(PROVIDER_EMAIL)
    .fetch_optional(pool)
    .await?
    .ok_or(UserStoreError::InvalidCredentials)?;

    let stored_hash = user
        .password_hash
        .as_deref()
        .ok_or(UserStoreError::InvalidCredentials)?;

    if !verify(password, stored_hash)? {
        return Err(UserStoreError::InvalidCredentials);
    }

    Ok(user)
}

/// Resolve a Google-federated login to an identity, creating one if needed
///
/// The lookup is by email only, not by provider: a federated login must
/// attach to a pre-existing local-password account rather than fail on it.
/// When an identity exists, the display name is backfilled only if the
/// stored name is NULL or empty. When none exists, a new identity tagged
/// `google` with no password hash is created.
pub async fn resolve_or_create_google_user(
    pool: &PgPool,
    email: &str,
    name: &str,
) -> Result<User, UserStoreError> {
    if let Some(existing) = get_user_by_email(pool, email).await? {
        if existing.name.as_deref().map_or(true, str::is_empty) && !name.is_empty() {
            let updated = sqlx::query_as::<_, User>(
                r#"
                UPDATE users SET name = $1
                WHERE id = $2
                RETURNING id, email, password_hash, name, auth_provider, created_at
                "#,
            )
            .bind(name)
            .bind(existing.id)
            .fetch_one(pool)
            .await?;
            return Ok(updated);
        }
        return Ok(existing);
    }

    let id = Uuid::new_v4();
    let now = Utc::now();

    let inserted = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, email, password_hash, name, auth_provider, created_at)
        VALUES ($1, $2, NULL, $3, $4, $5)
        RETURNING id, email, password_hash, name, auth_provider, created_at
        "#,
    )
    .bind(id)
    .bind(email)
    .bind(name)
    .bind(PROVIDER_GOOGLE)
    .bind(now)
    .fetch_one(pool)
    .await;

    match inserted {
        Ok(user) => Ok(user),
        // Lost a creation race; the identity exists now, so attach to it
        Err(e) if is_unique_violation(&e) => Ok(get_user_by_email(pool, email)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?),
        Err(e) => Err(UserStoreError::Database(e)),
    }
}

/// Get user by email (any provider)
pub async fn get_user_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    let query = format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1");
    sqlx::query_as::<_, User>(&query)
        .bind(email)
        .fetch_optional(pool)
        .await
}

/// Get user by ID
pub async fn get_user_by_id(pool: &PgPool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
    sqlx::query_as::<_, User>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await
}
