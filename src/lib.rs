//! Payroll demo login client.
//!
//! SYSTEM CONTEXT
//! ==============
//! A client-side login widget for the payroll demo API. The user types an
//! email and password, the widget posts them to `/auth/login`, and the view
//! flips from the credential form to an authenticated notice once the server
//! hands back a bearer token.
//!
//! [`SessionController`] owns the state machine; [`net`] talks HTTP;
//! [`view`] renders state; [`notify`] surfaces the binary login outcome.

pub mod config;
pub mod controller;
pub mod net;
pub mod notify;
pub mod session;
pub mod view;

pub use controller::SessionController;
pub use session::{ControllerState, Credentials, LoginOutcome, Session};
