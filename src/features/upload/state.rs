//! Upload sub-controller: `Idle → Uploading → (Uploaded | Failed)`, with
//! `remove` returning an uploaded document to `Idle`. Every transition that
//! the parent cares about returns the `UploadResult` to hand to it.

use super::types::{FileRejection, UploadResult, UploadedDocument, UploadedFile};
use crate::{
    app_lib::{AppError, endpoints::redact_url},
    features::effects::Notifier,
};
use tracing::{info, warn};

pub const UPLOADED: &str = "Document uploaded successfully";
pub const MISSING_URL: &str = "Upload finished but no file URL was returned. Please try again.";
pub const UPLOAD_FAILED: &str = "Upload failed. Please try again.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum UploadPhase {
    #[default]
    Idle,
    Uploading,
    Uploaded(UploadedDocument),
    Failed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentUpload {
    phase: UploadPhase,
}

impl DocumentUpload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &UploadPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == UploadPhase::Uploading
    }

    pub fn document(&self) -> Option<&UploadedDocument> {
        match &self.phase {
            UploadPhase::Uploaded(document) => Some(document),
            _ => None,
        }
    }

    pub fn begin(&mut self) {
        self.phase = UploadPhase::Uploading;
    }

    /// A picked file failed the client-side checks and was not sent.
    pub fn reject(&mut self, rejection: FileRejection, notifier: &impl Notifier) -> UploadResult {
        self.phase = UploadPhase::Failed;
        notifier.error(rejection.message());
        UploadResult::none()
    }

    /// Handles the service response. Only the first record is used.
    pub fn complete(
        &mut self,
        response: Option<Vec<UploadedFile>>,
        notifier: &impl Notifier,
    ) -> UploadResult {
        let first = response.and_then(|files| files.into_iter().next());
        let Some((url, file)) = first.and_then(|file| {
            let url = file.file_url()?.to_string();
            Some((url, file))
        }) else {
            warn!("Upload response carried no file URL");
            self.phase = UploadPhase::Failed;
            notifier.error(MISSING_URL);
            return UploadResult::none();
        };

        info!(host = %redact_url(&url), mime = ?file.mime_type, "Document uploaded");
        let document = UploadedDocument {
            url: url.clone(),
            mime_type: file.mime_type.clone(),
            name: file.name,
        };
        self.phase = UploadPhase::Uploaded(document);
        notifier.success(UPLOADED);
        UploadResult {
            url: Some(url),
            mime_type: file.mime_type,
        }
    }

    /// Transport or parse failure reported by the upload client.
    pub fn fail(&mut self, err: &AppError, notifier: &impl Notifier) -> UploadResult {
        warn!(error = %err, "Document upload failed");
        self.phase = UploadPhase::Failed;
        notifier.error(UPLOAD_FAILED);
        UploadResult::none()
    }

    /// Clears the preview; the parent loses its proof URL.
    pub fn remove(&mut self) -> UploadResult {
        self.phase = UploadPhase::Idle;
        UploadResult::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::{test_support::RecordingNotifier, upload::types::PreviewKind};
    use anyhow::Result;

    fn parse(json: &str) -> Result<Option<Vec<UploadedFile>>> {
        Ok(serde_json::from_str(json)?)
    }

    #[test]
    fn ufs_url_response_reports_url_and_image_preview() -> Result<()> {
        let notifier = RecordingNotifier::default();
        let mut upload = DocumentUpload::new();
        upload.begin();
        assert!(upload.is_loading());

        let result = upload.complete(
            parse(r#"[{"ufsUrl":"https://x/file.png","type":"image/png"}]"#)?,
            &notifier,
        );

        assert_eq!(result.url.as_deref(), Some("https://x/file.png"));
        assert_eq!(result.mime_type.as_deref(), Some("image/png"));
        assert!(!upload.is_loading());
        let document = upload.document().expect("document should be stored");
        assert_eq!(document.preview(), PreviewKind::Image);
        assert_eq!(notifier.successes(), vec![UPLOADED.to_string()]);
        Ok(())
    }

    #[test]
    fn pdf_response_previews_as_frame() -> Result<()> {
        let notifier = RecordingNotifier::default();
        let mut upload = DocumentUpload::new();
        upload.begin();

        let result = upload.complete(
            parse(r#"[{"url":"https://x/degree.pdf","type":"application/pdf","name":"degree.pdf"}]"#)?,
            &notifier,
        );

        assert_eq!(result.url.as_deref(), Some("https://x/degree.pdf"));
        let document = upload.document().expect("document should be stored");
        assert_eq!(document.preview(), PreviewKind::Pdf);
        assert_eq!(document.name.as_deref(), Some("degree.pdf"));
        Ok(())
    }

    #[test]
    fn empty_or_missing_response_reports_none() -> Result<()> {
        for json in ["[]", "null", r#"[{"name":"file.png","type":"image/png"}]"#] {
            let notifier = RecordingNotifier::default();
            let mut upload = DocumentUpload::new();
            upload.begin();

            let result = upload.complete(parse(json)?, &notifier);

            assert_eq!(result, UploadResult::none(), "{json}");
            assert_eq!(upload.phase(), &UploadPhase::Failed);
            assert_eq!(notifier.errors(), vec![MISSING_URL.to_string()]);
        }
        Ok(())
    }

    #[test]
    fn remove_clears_preview_and_reports_none() -> Result<()> {
        let notifier = RecordingNotifier::default();
        let mut upload = DocumentUpload::new();
        upload.begin();
        upload.complete(parse(r#"[{"ufsUrl":"https://x/file.png"}]"#)?, &notifier);
        assert!(upload.document().is_some());

        assert_eq!(upload.remove(), UploadResult::none());
        assert_eq!(upload.phase(), &UploadPhase::Idle);
        assert!(upload.document().is_none());
        Ok(())
    }

    #[test]
    fn transport_error_clears_loading() {
        let notifier = RecordingNotifier::default();
        let mut upload = DocumentUpload::new();
        upload.begin();

        let result = upload.fail(&AppError::Network("offline".to_string()), &notifier);

        assert_eq!(result, UploadResult::none());
        assert!(!upload.is_loading());
        assert_eq!(notifier.errors(), vec![UPLOAD_FAILED.to_string()]);
    }

    #[test]
    fn rejected_file_is_not_uploaded() {
        let notifier = RecordingNotifier::default();
        let mut upload = DocumentUpload::new();

        let result = upload.reject(FileRejection::TooLarge, &notifier);

        assert_eq!(result, UploadResult::none());
        assert_eq!(upload.phase(), &UploadPhase::Failed);
        assert_eq!(
            notifier.errors(),
            vec![FileRejection::TooLarge.message().to_string()]
        );
    }

    #[test]
    fn failed_upload_can_be_retried() -> Result<()> {
        let notifier = RecordingNotifier::default();
        let mut upload = DocumentUpload::new();
        upload.begin();
        upload.complete(parse("[]")?, &notifier);

        upload.begin();
        let result = upload.complete(parse(r#"[{"ufsUrl":"https://x/file.png"}]"#)?, &notifier);
        assert_eq!(result.url.as_deref(), Some("https://x/file.png"));
        Ok(())
    }
}
