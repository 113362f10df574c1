//! Multipart upload of the proof document to the configured upload route.

use super::types::UploadedFile;
use crate::app_lib::{AppError, api::post_form_data_response, config::AppConfig, endpoints};
use web_sys::{File, FormData};

/// Uploads one file and returns the service's file records. A JSON `null`
/// body yields `None`.
pub async fn upload_document(file: &File) -> Result<Option<Vec<UploadedFile>>, AppError> {
    let config = AppConfig::load();
    let form = FormData::new()
        .map_err(|_| AppError::Config("Unable to prepare the upload.".to_string()))?;
    form.append_with_blob_and_filename("files", file, &file.name())
        .map_err(|_| AppError::Serialization("Unable to attach the document.".to_string()))?;

    tracing::debug!(endpoint = %config.upload_endpoint, "Uploading document");
    post_form_data_response(
        &config.upload_base_url,
        &endpoints::upload_path(&config.upload_endpoint),
        form,
    )
    .await
}
