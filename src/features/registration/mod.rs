//! Registration feature: profile form state, schema, and the submission gate
//! that requires an uploaded proof document before anything is posted. The
//! payload includes the password and must never be logged.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod schema;
pub(crate) mod types;
pub(crate) mod workflow;
