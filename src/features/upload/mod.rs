//! Proof document upload: client-side file checks, the multipart call, and
//! the sub-controller that turns the service response into a URL for the
//! registration form.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod state;
pub(crate) mod types;
