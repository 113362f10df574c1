//! Backend endpoint paths and URL helpers shared by the feature clients.

/// Credential sign-in callback of the authentication service.
pub const SIGN_IN_PATH: &str = "/api/auth/callback/credentials";
/// Account registration endpoint.
pub const REGISTER_PATH: &str = "/api/auth";
/// Upload route; the logical endpoint is passed as the `slug` query parameter.
pub const UPLOAD_PATH: &str = "/api/uploadthing";

/// Maximum number of error body characters kept for notifications.
const MAX_ERROR_CHARS: usize = 500;

/// Builds a URL from an explicit base URL and the provided path.
pub fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Path of the upload route bound to the given logical endpoint.
pub fn upload_path(endpoint: &str) -> String {
    let slug: String = url::form_urlencoded::byte_serialize(endpoint.trim().as_bytes()).collect();
    format!("{UPLOAD_PATH}?slug={slug}")
}

/// Trims and truncates HTTP error bodies before they reach the UI.
pub fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

/// Returns only the host of a document URL for log lines.
pub fn redact_url(value: &str) -> String {
    url::Url::parse(value)
        .ok()
        .and_then(|parsed| parsed.host_str().map(ToString::to_string))
        .unwrap_or_else(|| "<invalid url>".to_string())
}
