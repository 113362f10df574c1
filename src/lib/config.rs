//! Build-time configuration for the registration, sign-in, and upload
//! endpoints with an optional runtime override. The runtime config is read from
//! `window.ALUMNI_CONFIG` (if present) so static deployments can change
//! endpoints without rebuilding. Configuration values are public; do not store
//! secrets here.

/// Logical upload route the document uploader is bound to.
pub const DEFAULT_UPLOAD_ENDPOINT: &str = "documentUploader";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub upload_base_url: String,
    pub upload_endpoint: String,
    pub log_level: String,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let mut config = Self::from_build_env(
            option_env!("ALUMNI_API_BASE_URL"),
            option_env!("ALUMNI_UPLOAD_BASE_URL"),
            option_env!("ALUMNI_UPLOAD_ENDPOINT"),
            option_env!("ALUMNI_LOG_LEVEL"),
        );

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }

    fn from_build_env(
        api_base_url: Option<&str>,
        upload_base_url: Option<&str>,
        upload_endpoint: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        // An unset upload base falls back to the API host.
        let api_base_url = api_base_url.unwrap_or("").trim().to_string();
        let upload_base_url = upload_base_url
            .and_then(normalize_runtime_value)
            .unwrap_or_else(|| api_base_url.clone());

        Self {
            api_base_url,
            upload_base_url,
            upload_endpoint: upload_endpoint
                .and_then(normalize_runtime_value)
                .unwrap_or_else(|| DEFAULT_UPLOAD_ENDPOINT.to_string()),
            log_level: log_level
                .and_then(normalize_runtime_value)
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        }
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    upload_base_url: Option<String>,
    upload_endpoint: Option<String>,
    log_level: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.upload_base_url {
        config.upload_base_url = value;
    }
    if let Some(value) = runtime.upload_endpoint {
        config.upload_endpoint = value;
    }
    if let Some(value) = runtime.log_level {
        config.log_level = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("ALUMNI_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        upload_base_url: read_runtime_value(&object, "upload_base_url"),
        upload_endpoint: read_runtime_value(&object, "upload_endpoint"),
        log_level: read_runtime_value(&object, "log_level"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
