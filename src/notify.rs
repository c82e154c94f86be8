//! User-facing login notifications.
//!
//! The browser widget used a blocking `alert`; here the surface is pluggable
//! so the CLI can print and the library can log.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use std::io::Write;
use std::sync::Mutex;

use crate::session::LoginOutcome;

/// Receives exactly one notification per resolved login attempt.
pub trait Notifier: Send + Sync {
    fn notify(&self, outcome: LoginOutcome);
}

/// Emits the notification as a `tracing` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, outcome: LoginOutcome) {
        match outcome {
            LoginOutcome::Succeeded => tracing::info!(notification = outcome.message(), "login succeeded"),
            LoginOutcome::Failed => tracing::warn!(notification = outcome.message(), "login failed"),
        }
    }
}

/// Writes the notification text as one line to a writer (stdout in the CLI).
pub struct WriterNotifier<W> {
    out: Mutex<W>,
}

impl<W: Write + Send> WriterNotifier<W> {
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { out: Mutex::new(out) }
    }

    /// Recover the writer, e.g. to inspect buffered output.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl<W: Write + Send> Notifier for WriterNotifier<W> {
    fn notify(&self, outcome: LoginOutcome) {
        let mut out = self
            .out
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if let Err(e) = writeln!(out, "{}", outcome.message()).and_then(|()| out.flush()) {
            tracing::warn!(error = %e, "failed to write login notification");
        }
    }
}
