use super::*;

// =============================================================
// Session
// =============================================================

#[test]
fn session_default_is_unauthenticated() {
    let session = Session::default();
    assert_eq!(session, Session::Unauthenticated);
    assert_eq!(session.token(), None);
}

#[test]
fn session_authenticated_exposes_token() {
    let session = Session::Authenticated { token: "abc123".to_owned() };
    assert_eq!(session.token(), Some("abc123"));
}

// =============================================================
// Credentials
// =============================================================

#[test]
fn credentials_default_empty() {
    let creds = Credentials::default();
    assert!(creds.email.is_empty());
    assert!(creds.password.is_empty());
}

#[test]
fn credentials_debug_redacts_password() {
    let creds = Credentials::new("hire-me@anshumat.org", "HireMe@2025!");
    let debug = format!("{creds:?}");
    assert!(debug.contains("hire-me@anshumat.org"));
    assert!(!debug.contains("HireMe@2025!"));
    assert!(debug.contains("<redacted>"));
}

#[test]
fn controller_state_default_is_anonymous_with_empty_form() {
    let state = ControllerState::default();
    assert_eq!(state.credentials, Credentials::default());
    assert_eq!(state.session, Session::Unauthenticated);
}

// =============================================================
// LoginOutcome
// =============================================================

#[test]
fn outcome_messages() {
    assert_eq!(LoginOutcome::Succeeded.message(), "Logged in");
    assert_eq!(LoginOutcome::Failed.message(), "Login failed");
}
