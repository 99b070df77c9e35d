/**
 * Google Federated Login Handlers
 *
 * This module implements the two legs of the authorization-code flow:
 *
 * - GET /auth/google redirects the browser to Google's authorization
 *   endpoint (scope `openid email profile`).
 * - GET /auth/google/callback exchanges the code for verified user info,
 *   resolves or creates the identity, binds a permanent session and sends
 *   the browser to the frontend home page.
 *
 * Every failure in the callback - missing code, exchange fault, userinfo
 * without an email - redirects the end user back to the frontend login
 * page with `error=google_auth_failed`. No partial session state is left
 * behind on failure.
 */

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Redirect, Response};

use crate::auth::handlers::types::CallbackParams;
use crate::auth::sessions::{create_session_token, session_cookie};
use crate::auth::users::resolve_or_create_google_user;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Federated login initiation: redirect to the provider
pub async fn google_login(State(state): State<AppState>) -> Redirect {
    Redirect::to(&state.oauth.authorize_url())
}

/// Federated login callback
///
/// On success the session cookie is set and the browser is redirected to
/// the frontend home page; on any failure the browser is redirected to the
/// frontend login page with a retry hint.
pub async fn google_callback(
    State(state): State<AppState>,
    Query(params): Query<CallbackParams>,
) -> Response {
    match complete_google_login(&state, params.code.as_deref()).await {
        Ok(cookie) => (
            [(header::SET_COOKIE, cookie)],
            Redirect::to(&format!("{}/home", state.frontend_url)),
        )
            .into_response(),
        Err(e) => {
            tracing::warn!("Google OAuth callback failed: {}", e);
            Redirect::to(&format!("{}/login?error=google_auth_failed", state.frontend_url))
                .into_response()
        }
    }
}

/// Exchange the code, resolve the identity and build the session cookie
async fn complete_google_login(
    state: &AppState,
    code: Option<&str>,
) -> Result<String, ApiError> {
    let code = code
        .filter(|c| !c.is_empty())
        .ok_or_else(|| ApiError::AuthFailure("no authorization code received".to_string()))?;

    let user_info = state.oauth.exchange_code(code).await?;

    // exchange_code guarantees a non-empty email
    let email = user_info.email.unwrap_or_default();
    let name = user_info
        .name
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| email.split('@').next().unwrap_or(&email).to_string());

    let user = resolve_or_create_google_user(&state.db, &email, &name).await?;

    tracing::info!("Federated login for {} (user {})", user.email, user.id);

    let token = create_session_token(user.id, &user.email).map_err(|e| {
        ApiError::Internal(format!("failed to create session token: {}", e))
    })?;

    Ok(session_cookie(&token))
}
