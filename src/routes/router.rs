/**
 * Router Configuration
 *
 * This module assembles the full Axum router: liveness endpoints, API
 * routes, the CORS layer for the browser frontend and request tracing.
 */

use axum::http::{header, HeaderValue, Method};
use axum::response::Json;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Liveness endpoint
async fn index() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "SmartBudget API running" }))
}

/// Health/status endpoint
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "Backend is working" }))
}

/// Create the Axum router with all routes configured
///
/// The CORS layer allows credentialed requests from the configured
/// frontend origin only; the session cookie does not travel otherwise.
pub fn create_router(state: AppState) -> Router<()> {
    let frontend_origin = state
        .frontend_url
        .parse::<HeaderValue>()
        .unwrap_or_else(|_| {
            tracing::warn!("Invalid FRONTEND_URL; defaulting CORS origin to localhost:3000");
            HeaderValue::from_static("http://localhost:3000")
        });

    let cors = CorsLayer::new()
        .allow_origin(frontend_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true);

    let router = Router::new()
        .route("/", axum::routing::get(index))
        .route("/test", axum::routing::get(health));

    let router = configure_api_routes(router);

    router
        .fallback(|| async { "404 Not Found" })
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
