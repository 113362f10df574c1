//! Shared frontend utilities for API access, configuration, errors, logging,
//! and build metadata.
//!
//! ## Backend Flows
//!
//! ### Sign-in
//!
//! The client POSTs `{email, password, role, redirect: false}` to the
//! credentials callback and reads `{ok}` from the response. A 401 is an
//! ordinary rejection, not an error.
//!
//! ### Registration
//!
//! 1. **Upload:** The proof document is sent as multipart form data to the
//!    upload route bound to `documentUploader`; the response names the stored
//!    file URL.
//! 2. **Register:** The profile, including that URL as `proofPicture`, is
//!    POSTed to `/api/auth`. Only HTTP 200 counts as success; error bodies may
//!    carry `{"message": ...}` which is shown verbatim.
//!
//! These helpers never log request bodies since they carry passwords.

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub(crate) mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}
pub(crate) mod config;
pub(crate) mod endpoints;
pub(crate) mod errors;
pub(crate) mod logging;
pub(crate) mod paths;

pub(crate) const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH_SHORT {
    Some(hash) => hash,
    None => "unknown",
};

pub(crate) use errors::AppError;

#[cfg(test)]
mod tests {
    const INDEX_HTML: &str = include_str!("../../index.html");

    #[test]
    fn index_loads_icon_font_and_utility_styles() {
        assert!(INDEX_HTML.contains("family=Material+Symbols+Outlined"));
        assert!(INDEX_HTML.contains("cdn.tailwindcss.com"));
        assert!(INDEX_HTML.contains(r#"data-trunk rel="rust""#));
    }
}
