/**
 * Server Initialization
 *
 * This module assembles the Axum application: it connects to the database,
 * runs migrations, constructs the OAuth client and builds the router.
 *
 * # Initialization Steps
 *
 * 1. Connect the database pool and run migrations (mandatory)
 * 2. Build the Google OAuth client from configuration
 * 3. Assemble application state and the router
 */

use axum::Router;

use crate::auth::oauth::GoogleOAuth;
use crate::routes::router::create_router;
use crate::server::config::{connect_database, ServerConfig};
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails when the database is unreachable, migrations fail, or an OAuth
/// endpoint URL is malformed.
pub async fn create_app(config: &ServerConfig) -> Result<Router, Box<dyn std::error::Error>> {
    tracing::info!("Initializing SmartBudget backend server");

    let db = connect_database(&config.database_url).await?;
    let oauth = GoogleOAuth::new(config)?;

    let state = AppState {
        db,
        oauth,
        frontend_url: config.frontend_url.clone(),
    };

    tracing::info!("Router configured");
    Ok(create_router(state))
}
