//! Session controller: the login widget's state machine.
//!
//! DESIGN
//! ======
//! The controller is the only writer of [`ControllerState`]. State lives in a
//! `tokio::sync::watch` channel so views can subscribe and re-render on change
//! while the controller mutates it in place.
//!
//! States are `Unauthenticated` and `Authenticated`. The only transition is
//! Unauthenticated -> Authenticated on a login response carrying a token.
//! Failures never touch the session.
//!
//! CONCURRENCY
//! ===========
//! `attempt_login` snapshots the credentials when it is called, not when the
//! returned future is first polled. Overlapping attempts are not serialized:
//! each one writes the session when its own response arrives, so the last
//! response to resolve wins even if its request was sent first. No lock is
//! held across the network await.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::future::Future;
use std::sync::Arc;

use tokio::sync::watch;
use uuid::Uuid;

use crate::net::{AuthEndpoint, LoginForm};
use crate::notify::{Notifier, TracingNotifier};
use crate::session::{ControllerState, Credentials, LoginOutcome, Session};

pub struct SessionController<E> {
    endpoint: E,
    notifier: Arc<dyn Notifier>,
    state: watch::Sender<ControllerState>,
}

impl<E: AuthEndpoint> SessionController<E> {
    /// Controller with empty credentials, no session, and notifications
    /// routed to `tracing`.
    #[must_use]
    pub fn new(endpoint: E) -> Self {
        Self::with_notifier(endpoint, Arc::new(TracingNotifier))
    }

    #[must_use]
    pub fn with_notifier(endpoint: E, notifier: Arc<dyn Notifier>) -> Self {
        Self { endpoint, notifier, state: watch::Sender::new(ControllerState::default()) }
    }

    #[must_use]
    pub fn endpoint(&self) -> &E {
        &self.endpoint
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> ControllerState {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn session(&self) -> Session {
        self.state.borrow().session.clone()
    }

    #[must_use]
    pub fn credentials(&self) -> Credentials {
        self.state.borrow().credentials.clone()
    }

    /// Receiver that is marked changed whenever the state is modified.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ControllerState> {
        self.state.subscribe()
    }

    /// Replace the email input. Subscribers are only woken when the value
    /// actually changes.
    pub fn set_email(&self, value: impl Into<String>) {
        let value = value.into();
        self.state.send_if_modified(|state| replace_if_changed(&mut state.credentials.email, value));
    }

    /// Replace the password input. Same contract as [`Self::set_email`].
    pub fn set_password(&self, value: impl Into<String>) {
        let value = value.into();
        self.state.send_if_modified(|state| replace_if_changed(&mut state.credentials.password, value));
    }

    /// Submit the current credentials once and apply the result.
    ///
    /// Credentials are captured before this returns. The future always
    /// resolves to an outcome and fires exactly one notification; every
    /// failure cause (rejected credentials, non-2xx, transport, decode) is
    /// logged and collapsed to [`LoginOutcome::Failed`].
    pub fn attempt_login(&self) -> impl Future<Output = LoginOutcome> + Send + '_ {
        let form = LoginForm::from(&self.state.borrow().credentials);
        let attempt = Uuid::new_v4();

        async move {
            tracing::debug!(%attempt, username = %form.username, "dispatching login request");

            let outcome = match self.endpoint.login(&form).await {
                Ok(response) => match response.into_access_token() {
                    Some(token) => {
                        self.state.send_modify(|state| state.session = Session::Authenticated { token });
                        tracing::info!(%attempt, username = %form.username, "session authenticated");
                        LoginOutcome::Succeeded
                    }
                    None => {
                        tracing::warn!(%attempt, "login response carried no access token");
                        LoginOutcome::Failed
                    }
                },
                Err(e) => {
                    tracing::warn!(%attempt, error = %e, "login request failed");
                    LoginOutcome::Failed
                }
            };

            self.notifier.notify(outcome);
            outcome
        }
    }
}

fn replace_if_changed(field: &mut String, value: String) -> bool {
    if *field == value {
        return false;
    }
    *field = value;
    true
}
