//! HTTP helpers for JSON and multipart APIs with consistent timeouts and error
//! handling. Feature clients use these helpers to avoid duplicating request
//! setup and to enforce a predictable timeout policy. Request bodies carry
//! passwords, so payloads are never logged here.

use super::{
    endpoints::build_url_with_base,
    errors::AppError,
};
use gloo_net::http::{Request, Response};
use gloo_timers::callback::Timeout;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::to_string;
use web_sys::{AbortController, AbortSignal, FormData};

/// Default request timeout (milliseconds) applied to JSON helpers.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;
/// Uploads carry documents of a few megabytes and get a longer budget.
const UPLOAD_TIMEOUT_MS: u32 = 60_000;

/// Posts JSON and parses a JSON response. A 401 yields `None`.
pub async fn post_json_optional_response<B: Serialize, T: DeserializeOwned>(
    base_url: &str,
    path: &str,
    body: &B,
) -> Result<Option<T>, AppError> {
    let url = build_url_with_base(base_url, path);
    let payload = encode(body)?;
    let response = send_with_timeout(DEFAULT_TIMEOUT_MS, move |signal| {
        Request::post(&url)
            .header("Content-Type", "application/json")
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    if response.status() == 401 {
        return Ok(None);
    }
    handle_json_response(response).await.map(Some)
}

/// Posts JSON and returns the success status code; the body is ignored.
pub async fn post_json_status<B: Serialize>(
    base_url: &str,
    path: &str,
    body: &B,
) -> Result<u16, AppError> {
    let url = build_url_with_base(base_url, path);
    let payload = encode(body)?;
    let response = send_with_timeout(DEFAULT_TIMEOUT_MS, move |signal| {
        Request::post(&url)
            .header("Content-Type", "application/json")
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    if response.ok() {
        Ok(response.status())
    } else {
        Err(http_error(response).await)
    }
}

/// Posts a multipart form and parses a JSON response. The browser sets the
/// multipart boundary, so no `Content-Type` header is added.
pub async fn post_form_data_response<T: DeserializeOwned>(
    base_url: &str,
    path: &str,
    form: FormData,
) -> Result<T, AppError> {
    let url = build_url_with_base(base_url, path);
    let response = send_with_timeout(UPLOAD_TIMEOUT_MS, move |signal| {
        Request::post(&url)
            .abort_signal(Some(signal))
            .body(form)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

fn encode<B: Serialize>(body: &B) -> Result<String, AppError> {
    to_string(body).map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))
}

/// Maps network errors into user-facing `AppError` variants with timeout detection.
fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Sends a request with an abort timeout so a hung request cannot pin the
/// submitting or uploading state.
async fn send_with_timeout(
    timeout_ms: u32,
    build_request: impl FnOnce(&AbortSignal) -> Result<Request, AppError>,
) -> Result<Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(timeout_ms, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}

/// Parses JSON responses and surfaces HTTP errors with their raw bodies.
async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        Err(http_error(response).await)
    }
}

async fn http_error(response: Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    tracing::debug!(status, "Request rejected by server");
    AppError::Http {
        status,
        body,
    }
}
