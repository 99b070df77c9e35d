/**
 * Google OAuth Client
 *
 * This module wraps the external identity provider's authorization-code
 * exchange. It builds the authorization redirect URL and exchanges a
 * callback code for verified user info (email, name).
 *
 * The endpoint URLs are taken from configuration so tests can point the
 * client at a mock server; the defaults are Google's production endpoints.
 */

use reqwest::Url;
use serde::Deserialize;
use thiserror::Error;

use crate::server::config::ServerConfig;

/// Errors from the federated login exchange
///
/// Every variant signals the same thing to the end user: the federated
/// login failed and should be retried from the login entry point.
#[derive(Debug, Error)]
pub enum OAuthError {
    /// A configured endpoint URL did not parse
    #[error("invalid OAuth endpoint: {0}")]
    InvalidEndpoint(String),

    /// Token exchange or userinfo request failed
    #[error("exchange request failed: {0}")]
    Exchange(#[from] reqwest::Error),

    /// The provider's userinfo response carried no email
    #[error("userinfo response contained no email")]
    MissingEmail,
}

/// Token endpoint response; only the access token is consumed
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Verified user info returned by the provider
#[derive(Debug, Deserialize)]
pub struct GoogleUserInfo {
    pub email: Option<String>,
    pub name: Option<String>,
}

/// Client for Google's authorization-code exchange and userinfo endpoints
#[derive(Clone)]
pub struct GoogleOAuth {
    http: reqwest::Client,
    client_id: String,
    client_secret: String,
    redirect_url: String,
    auth_url: Url,
    token_url: Url,
    userinfo_url: Url,
}

impl GoogleOAuth {
    /// Build the client from server configuration
    pub fn new(config: &ServerConfig) -> Result<Self, OAuthError> {
        let parse = |url: &str| {
            Url::parse(url).map_err(|e| OAuthError::InvalidEndpoint(format!("{}: {}", url, e)))
        };

        Ok(Self {
            http: reqwest::Client::new(),
            client_id: config.google_client_id.clone(),
            client_secret: config.google_client_secret.clone(),
            redirect_url: config.oauth_redirect_url.clone(),
            auth_url: parse(&config.google_auth_url)?,
            token_url: parse(&config.google_token_url)?,
            userinfo_url: parse(&config.google_userinfo_url)?,
        })
    }

    /// Build the authorization redirect URL for the login initiation route
    pub fn authorize_url(&self) -> String {
        let mut url = self.auth_url.clone();
        url.query_pairs_mut()
            .append_pair("client_id", &self.client_id)
            .append_pair("redirect_uri", &self.redirect_url)
            .append_pair("response_type", "code")
            .append_pair("scope", "openid email profile")
            .append_pair("prompt", "select_account");
        url.to_string()
    }

    /// Exchange an authorization code for the provider's verified user info
    ///
    /// Any network fault, non-success status or missing email maps to an
    /// `OAuthError`; no partial state is produced.
    pub async fn exchange_code(&self, code: &str) -> Result<GoogleUserInfo, OAuthError> {
        let token: TokenResponse = self
            .http
            .post(self.token_url.clone())
            .form(&[
                ("code", code),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("redirect_uri", self.redirect_url.as_str()),
                ("grant_type", "authorization_code"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let user_info: GoogleUserInfo = self
            .http
            .get(self.userinfo_url.clone())
            .bearer_auth(&token.access_token)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if user_info.email.as_deref().map_or(true, str::is_empty) {
            return Err(OAuthError::MissingEmail);
        }

        Ok(user_info)
    }
}
