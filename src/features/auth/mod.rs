//! Auth feature module covering credential sign-in and the in-memory session.
//! It keeps sign-in decisions out of the UI. This module handles passwords and
//! must avoid logging them.
//!
//! Flow Overview: the login form is validated locally, the credentials provider
//! is called once with redirects disabled, and a successful result records the
//! session and moves the user to their profile.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
#[cfg(target_arch = "wasm32")]
mod guards;
pub(crate) mod login;
pub(crate) mod schema;
#[cfg(target_arch = "wasm32")]
pub(crate) mod state;
pub(crate) mod types;

#[cfg(target_arch = "wasm32")]
pub(crate) use guards::RequireAuth;
