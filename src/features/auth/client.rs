//! HTTP client for the credentials sign-in endpoint.

use super::{
    login::Authenticator,
    types::{SignInRequest, SignInResponse},
};
use crate::app_lib::{AppError, api::post_json_optional_response, config::AppConfig, endpoints};

/// Signs in against the configured API host.
#[derive(Clone, Copy, Default)]
pub struct HttpAuthenticator;

impl Authenticator for HttpAuthenticator {
    /// A 401 from the provider maps to `ok: false`.
    async fn sign_in(&self, request: &SignInRequest<'_>) -> Result<SignInResponse, AppError> {
        let config = AppConfig::load();
        let response = post_json_optional_response::<_, SignInResponse>(
            &config.api_base_url,
            endpoints::SIGN_IN_PATH,
            request,
        )
        .await?;
        Ok(response.unwrap_or_default())
    }
}
