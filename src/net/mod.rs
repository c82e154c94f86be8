//! Network layer: HTTP client for the payroll auth endpoints.
//!
//! DESIGN
//! ======
//! The session controller talks to the server through the [`AuthEndpoint`]
//! trait so tests can script responses and timing without a socket.
//! [`HttpAuthClient`] is the real `reqwest` implementation.

pub mod api;
pub mod types;

pub use api::{AuthEndpoint, HttpAuthClient};
pub use types::{AuthError, LoginForm, LoginResponse, UserProfile};
