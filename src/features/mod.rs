//! Domain-level frontend features (sign-in, registration, document upload) and
//! their shared form logic. Routes import these modules to keep view code
//! focused while validation and submission rules live in plain Rust that is
//! unit-tested on the host.

pub(crate) mod auth;
pub(crate) mod effects;
pub(crate) mod forms;
pub(crate) mod registration;
#[cfg(test)]
pub(crate) mod test_support;
pub(crate) mod upload;
