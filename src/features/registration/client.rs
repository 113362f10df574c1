//! HTTP client for the account registration endpoint.

use super::{types::RegistrationRequest, workflow::Registrar};
use crate::app_lib::{AppError, api::post_json_status, config::AppConfig, endpoints};

/// Registers accounts against the configured API host.
#[derive(Clone, Copy, Default)]
pub struct HttpRegistrar;

impl Registrar for HttpRegistrar {
    async fn register(&self, request: &RegistrationRequest<'_>) -> Result<u16, AppError> {
        let config = AppConfig::load();
        post_json_status(&config.api_base_url, endpoints::REGISTER_PATH, request).await
    }
}
