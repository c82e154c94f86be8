//! REST client for `/auth/login` and `/auth/me`.
//!
//! Thin HTTP wrapper; decoding lives in `types` so it can be tested without
//! a server. No timeout and no retry are configured: a login request stays
//! in flight until the server or the transport gives up.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AuthError, LoginForm, LoginResponse, UserProfile, parse_login_response, parse_profile};
use crate::config::ClientConfig;

const USER_AGENT: &str = concat!("payroll-login/", env!("CARGO_PKG_VERSION"));

// =============================================================================
// TRAIT
// =============================================================================

/// Anything that can exchange a login form for a decoded response.
#[async_trait::async_trait]
pub trait AuthEndpoint: Send + Sync {
    /// Submit credentials once.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or an
    /// undecodable body.
    async fn login(&self, form: &LoginForm) -> Result<LoginResponse, AuthError>;
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct HttpAuthClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl HttpAuthClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: ClientConfig) -> Result<Self, AuthError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AuthError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, config })
    }

    /// Fetch the profile of the user owning `token` from `/auth/me`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status (e.g. 401 for an
    /// expired token), or an undecodable body.
    pub async fn fetch_profile(&self, token: &str) -> Result<UserProfile, AuthError> {
        let response = self
            .http
            .get(self.config.profile_url())
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| AuthError::Request(e.to_string()))?;

        let body = read_success_body(response).await?;
        parse_profile(&body)
    }
}

#[async_trait::async_trait]
impl AuthEndpoint for HttpAuthClient {
    async fn login(&self, form: &LoginForm) -> Result<LoginResponse, AuthError> {
        let response = self
            .http
            .post(self.config.login_url())
            .form(form)
            .send()
            .await
            .map_err(|e| AuthError::Request(e.to_string()))?;

        let body = read_success_body(response).await?;
        parse_login_response(&body)
    }
}

async fn read_success_body(response: reqwest::Response) -> Result<String, AuthError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| AuthError::Request(e.to_string()))?;

    if !status.is_success() {
        return Err(AuthError::Status { status: status.as_u16(), body });
    }
    Ok(body)
}
