//! Text rendering of the login widget.
//!
//! The view is a pure function of [`ControllerState`]: the credential form
//! while anonymous, a static notice once authenticated. There is no loading
//! state; an in-flight login is not shown.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use std::fmt;

use crate::session::{ControllerState, Session};

pub const TITLE: &str = "Payroll Demo (MVP)";
pub const SEEDED_ADMIN_HINT: &str = "Seeded admin: hire-me@anshumat.org / HireMe@2025!";
pub const AUTHENTICATED_NOTICE: &str = "Authenticated. You can use API via /docs (backend) or extend frontend.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View<'a> {
    /// Form bound to `set_email`, `set_password` and `attempt_login`.
    CredentialForm { email: &'a str, password: &'a str },
    AuthenticatedNotice,
}

#[must_use]
pub fn render(state: &ControllerState) -> View<'_> {
    match state.session {
        Session::Unauthenticated => {
            View::CredentialForm { email: &state.credentials.email, password: &state.credentials.password }
        }
        Session::Authenticated { .. } => View::AuthenticatedNotice,
    }
}

impl fmt::Display for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{TITLE}")?;
        writeln!(f, "{SEEDED_ADMIN_HINT}")?;
        match self {
            Self::CredentialForm { email, password } => {
                writeln!(f, "email:    {email}")?;
                // Password inputs show one mask character per typed character.
                writeln!(f, "password: {}", "*".repeat(password.chars().count()))?;
                write!(f, "[Login]")
            }
            Self::AuthenticatedNotice => write!(f, "{AUTHENTICATED_NOTICE}"),
        }
    }
}
