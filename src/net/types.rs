//! Wire types for the authentication endpoint.
//!
//! DESIGN
//! ======
//! The login request is form-url-encoded (`username`, `password`, in that
//! order) because that is what the server's OAuth2 password form expects.
//! Responses are decoded leniently: any JSON object is accepted and the
//! caller decides whether it carries a usable token.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::session::Credentials;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by the endpoint client.
///
/// The session controller collapses all of these to a single failed outcome;
/// they exist so the cause can be logged.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request never produced a response (DNS, connect, TLS, reset).
    #[error("request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status.
    #[error("server returned status {status}")]
    Status { status: u16, body: String },

    /// The response body was not the expected JSON shape.
    #[error("response decode failed: {0}")]
    Decode(String),
}

// =============================================================================
// REQUEST
// =============================================================================

/// Form body for `POST /auth/login`. Field order is part of the contract.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl From<&Credentials> for LoginForm {
    fn from(creds: &Credentials) -> Self {
        Self { username: creds.email.clone(), password: creds.password.clone() }
    }
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

// =============================================================================
// RESPONSES
// =============================================================================

/// Decoded body of a login response.
///
/// The token is kept as raw JSON: a server may send `null`, an empty
/// string or omit the field entirely, and all of those mean "no token".
/// Other fields (`token_type`, `detail`) are ignored.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    access_token: Option<Value>,
}

impl LoginResponse {
    /// Consume the response, keeping only a usable token.
    #[must_use]
    pub fn into_access_token(self) -> Option<String> {
        match self.access_token {
            Some(Value::String(token)) if !token.is_empty() => Some(token),
            _ => None,
        }
    }
}

/// Profile returned by `GET /auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    pub role: String,
}

// =============================================================================
// PARSING
// =============================================================================

/// Decode a login response body.
///
/// # Errors
///
/// Returns [`AuthError::Decode`] if the body is not JSON or not an object.
pub fn parse_login_response(body: &str) -> Result<LoginResponse, AuthError> {
    let value: Value = serde_json::from_str(body).map_err(|e| AuthError::Decode(e.to_string()))?;
    if !value.is_object() {
        return Err(AuthError::Decode(format!("expected a JSON object, got: {body}")));
    }
    serde_json::from_value(value).map_err(|e| AuthError::Decode(e.to_string()))
}

/// Decode a `/auth/me` response body.
///
/// # Errors
///
/// Returns [`AuthError::Decode`] if the body does not match [`UserProfile`].
pub fn parse_profile(body: &str) -> Result<UserProfile, AuthError> {
    serde_json::from_str(body).map_err(|e| AuthError::Decode(e.to_string()))
}
