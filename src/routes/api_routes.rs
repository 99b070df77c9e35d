/**
 * API Route Configuration
 *
 * This module wires the authentication and expense handlers onto the
 * router.
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /api/register` - User registration
 * - `POST /api/login` - User login (binds a permanent session)
 * - `POST /api/logout` - Clear the session (idempotent)
 * - `GET /api/me` - Current user info (requires a session)
 * - `GET /auth/google` - Federated login initiation
 * - `GET /auth/google/callback` - Federated login callback
 *
 * ## Expenses (both require a session)
 * - `POST /add_expense` - Record an expense
 * - `GET /api/expenses` - List the user's expenses, newest first
 */

use axum::Router;

use crate::auth::{google_callback, google_login, login, logout, me, register};
use crate::expenses::{add_expense, list_expenses};
use crate::server::state::AppState;

/// Configure API routes
///
/// Registration, login and the OAuth legs are public; `me`, `add_expense`
/// and `list_expenses` enforce the session gate via their `SessionUser`
/// extractor rather than a route-level layer.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Authentication endpoints
        .route("/api/register", axum::routing::post(register))
        .route("/api/login", axum::routing::post(login))
        .route("/api/logout", axum::routing::post(logout))
        .route("/api/me", axum::routing::get(me))
        // Federated login
        .route("/auth/google", axum::routing::get(google_login))
        .route("/auth/google/callback", axum::routing::get(google_callback))
        // Expense endpoints
        .route("/add_expense", axum::routing::post(add_expense))
        .route("/api/expenses", axum::routing::get(list_expenses))
}
