/**
 * Server Configuration
 *
 * This module loads server configuration from environment variables and
 * owns database pool creation.
 *
 * # Configuration Sources
 *
 * Configuration comes from the environment (optionally via a .env file
 * loaded in main), with development defaults for everything except
 * `DATABASE_URL`, which is required: the server does not start without
 * a reachable database.
 */

use sqlx::PgPool;
use thiserror::Error;

/// Default Google OAuth endpoints; overridable for tests
const DEFAULT_GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/auth";
const DEFAULT_GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const DEFAULT_GOOGLE_USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v2/userinfo";

/// Configuration errors surfaced at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("DATABASE_URL is not set")]
    MissingDatabaseUrl,
}

/// Server configuration loaded at startup
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// PostgreSQL connection string (required)
    pub database_url: String,
    /// HTTP listen port
    pub port: u16,
    /// Google OAuth client credentials
    pub google_client_id: String,
    pub google_client_secret: String,
    /// Callback URL registered with the provider
    pub oauth_redirect_url: String,
    /// Frontend origin used for CORS and post-login redirects
    pub frontend_url: String,
    /// Provider endpoints (defaults point at Google production)
    pub google_auth_url: String,
    pub google_token_url: String,
    pub google_userinfo_url: String,
}

impl ServerConfig {
    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// Fails only when `DATABASE_URL` is missing. Absent OAuth credentials
    /// are logged as a warning; password login still works without them.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::MissingDatabaseUrl)?;

        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(5000);

        let google_client_id = std::env::var("GOOGLE_CLIENT_ID").unwrap_or_default();
        let google_client_secret = std::env::var("GOOGLE_CLIENT_SECRET").unwrap_or_default();
        if google_client_id.is_empty() || google_client_secret.is_empty() {
            tracing::warn!("Google OAuth credentials not set; federated login will fail");
        }

        Ok(Self {
            database_url,
            port,
            google_client_id,
            google_client_secret,
            oauth_redirect_url: std::env::var("OAUTH_REDIRECT_URL").unwrap_or_else(|_| {
                "http://localhost:5000/auth/google/callback".to_string()
            }),
            frontend_url: std::env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            google_auth_url: std::env::var("GOOGLE_AUTH_URL")
                .unwrap_or_else(|_| DEFAULT_GOOGLE_AUTH_URL.to_string()),
            google_token_url: std::env::var("GOOGLE_TOKEN_URL")
                .unwrap_or_else(|_| DEFAULT_GOOGLE_TOKEN_URL.to_string()),
            google_userinfo_url: std::env::var("GOOGLE_USERINFO_URL")
                .unwrap_or_else(|_| DEFAULT_GOOGLE_USERINFO_URL.to_string()),
        })
    }
}

/// Connect to the database and run migrations
///
/// Unlike optional services, the database is mandatory: a connection or
/// migration failure aborts startup.
pub async fn connect_database(database_url: &str) -> Result<PgPool, sqlx::Error> {
    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(database_url).await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed");

    Ok(pool)
}
