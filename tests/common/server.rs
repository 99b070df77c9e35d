//! Test server construction helpers

use axum_test::TestServer;
use sqlx::PgPool;

use smartbudget::auth::oauth::GoogleOAuth;
use smartbudget::routes::create_router;
use smartbudget::server::config::ServerConfig;
use smartbudget::server::state::AppState;

/// A ServerConfig suitable for tests; OAuth endpoints can be redirected
/// at a mock server.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        database_url: "unused-in-tests".to_string(),
        port: 0,
        google_client_id: "test-client-id".to_string(),
        google_client_secret: "test-client-secret".to_string(),
        oauth_redirect_url: "http://localhost:5000/auth/google/callback".to_string(),
        frontend_url: "http://localhost:3000".to_string(),
        google_auth_url: "https://accounts.google.com/o/oauth2/auth".to_string(),
        google_token_url: "https://oauth2.googleapis.com/token".to_string(),
        google_userinfo_url: "https://www.googleapis.com/oauth2/v2/userinfo".to_string(),
    }
}

/// Build application state over a test pool
pub fn test_state(pool: PgPool, config: &ServerConfig) -> AppState {
    AppState {
        db: pool,
        oauth: GoogleOAuth::new(config).expect("Failed to build OAuth client"),
        frontend_url: config.frontend_url.clone(),
    }
}

/// Build a TestServer over the full router
pub fn test_server(pool: PgPool) -> TestServer {
    let state = test_state(pool, &test_config());
    TestServer::new(create_router(state)).expect("Failed to start test server")
}
