//! Session state for the login widget.
//!
//! DESIGN
//! ======
//! The session is a closed two-variant enum instead of a nullable token so
//! every consumer has to handle both the anonymous and the authenticated case.
//! Credentials live next to it because the controller snapshots both together.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;

/// Email and password as typed into the login form.
///
/// Held in memory only and never persisted. The password is redacted from
/// `Debug` output so credentials cannot leak through logs.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Client-side record of whether the user is logged in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Unauthenticated,
    Authenticated {
        /// Opaque bearer token issued by the auth server.
        token: String,
    },
}

impl Session {
    /// Bearer token, if authenticated.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Unauthenticated => None,
            Self::Authenticated { token } => Some(token),
        }
    }
}

/// Everything the view reads: the form inputs plus the session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ControllerState {
    pub credentials: Credentials,
    pub session: Session,
}

/// Binary result of a login attempt. All failure causes collapse to `Failed`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    Succeeded,
    Failed,
}

impl LoginOutcome {
    /// User-facing notification text.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Succeeded => "Logged in",
            Self::Failed => "Login failed",
        }
    }
}
