use super::*;

use crate::session::Credentials;

fn state(email: &str, password: &str, session: Session) -> ControllerState {
    ControllerState { credentials: Credentials::new(email, password), session }
}

#[test]
fn unauthenticated_renders_form_with_current_inputs() {
    let s = state("a@x.com", "pw", Session::Unauthenticated);
    assert_eq!(render(&s), View::CredentialForm { email: "a@x.com", password: "pw" });
}

#[test]
fn authenticated_renders_notice() {
    let s = state("a@x.com", "pw", Session::Authenticated { token: "t".to_owned() });
    assert_eq!(render(&s), View::AuthenticatedNotice);
}

#[test]
fn form_text_masks_password() {
    let s = state("hire-me@anshumat.org", "HireMe@2025!", Session::Unauthenticated);
    let text = render(&s).to_string();
    assert!(text.starts_with(TITLE));
    assert!(text.contains("email:    hire-me@anshumat.org"));
    assert!(text.contains("password: ************"));
    assert!(text.ends_with("[Login]"));
}

#[test]
fn empty_form_text() {
    let text = render(&ControllerState::default()).to_string();
    assert!(text.contains("email:    \n"));
    assert!(text.contains("password: \n"));
}

#[test]
fn notice_text_never_shows_token() {
    let s = state("a@x.com", "pw", Session::Authenticated { token: "secret-token".to_owned() });
    let text = render(&s).to_string();
    assert!(text.contains(AUTHENTICATED_NOTICE));
    assert!(!text.contains("secret-token"));
    assert!(!text.contains("[Login]"));
}
