//! Security subsystem.
//!
//! One pipeline filter lives here: HTTP Basic authentication, built from
//! the `[auth]` config section and registered in front of the dispatcher.

pub mod basic_auth;

pub use basic_auth::{AuthenticatedUser, BasicAuthFilter};
