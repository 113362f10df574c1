//! Upload service response shape and preview classification.
//!
//! The service answers with a JSON array of file records. The stored file URL
//! is `ufsUrl`; older deployments only send `url`, which is used when `ufsUrl`
//! is absent or empty. Nothing else is probed.

use serde::Deserialize;

/// Value of the file input's `accept` attribute.
pub const ACCEPTED_TYPES: &str = "image/*,application/pdf";
pub const PDF_MIME: &str = "application/pdf";
/// Largest document the uploader sends (4 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 4 * 1024 * 1024;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct UploadedFile {
    #[serde(default, rename = "ufsUrl")]
    pub ufs_url: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, rename = "type")]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
}

impl UploadedFile {
    /// Stored file URL, preferring `ufsUrl` over the legacy `url`.
    pub fn file_url(&self) -> Option<&str> {
        [self.ufs_url.as_deref(), self.url.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|value| !value.is_empty())
    }
}

/// What the upload sub-controller reports to its parent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadResult {
    pub url: Option<String>,
    pub mime_type: Option<String>,
}

impl UploadResult {
    pub fn none() -> Self {
        Self::default()
    }
}

/// A successfully stored document kept for preview.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadedDocument {
    pub url: String,
    pub mime_type: Option<String>,
    pub name: Option<String>,
}

impl UploadedDocument {
    pub fn preview(&self) -> PreviewKind {
        PreviewKind::for_mime(self.mime_type.as_deref())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreviewKind {
    /// Inline `<img>`.
    Image,
    /// Embedded frame plus an "Open full document" link.
    Pdf,
    /// Plain view/download link.
    Link,
}

impl PreviewKind {
    pub fn for_mime(mime_type: Option<&str>) -> Self {
        let Some(mime_type) = mime_type.map(|value| value.trim().to_ascii_lowercase()) else {
            return PreviewKind::Link;
        };
        if mime_type.starts_with("image/") {
            PreviewKind::Image
        } else if mime_type == PDF_MIME {
            PreviewKind::Pdf
        } else {
            PreviewKind::Link
        }
    }
}

/// Why a picked file is not sent to the upload service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileRejection {
    UnsupportedType,
    TooLarge,
    Empty,
}

impl FileRejection {
    pub fn message(self) -> &'static str {
        match self {
            FileRejection::UnsupportedType => "Only images or PDF documents can be uploaded.",
            FileRejection::TooLarge => "The document must be 4 MB or smaller.",
            FileRejection::Empty => "The selected file is empty.",
        }
    }
}

/// Client-side checks run before a file is uploaded.
pub fn check_file(mime_type: &str, size: u64) -> Result<(), FileRejection> {
    let mime_type = mime_type.trim().to_ascii_lowercase();
    if !(mime_type.starts_with("image/") || mime_type == PDF_MIME) {
        return Err(FileRejection::UnsupportedType);
    }
    if size == 0 {
        return Err(FileRejection::Empty);
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(FileRejection::TooLarge);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn parses_ufs_url_records() -> Result<()> {
        let files: Vec<UploadedFile> = serde_json::from_str(
            r#"[{"ufsUrl":"https://x/file.png","type":"image/png","name":"file.png","key":"abc","size":1024}]"#,
        )?;
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_url(), Some("https://x/file.png"));
        assert_eq!(files[0].mime_type.as_deref(), Some("image/png"));
        assert_eq!(files[0].size, Some(1024));
        Ok(())
    }

    #[test]
    fn falls_back_to_legacy_url() -> Result<()> {
        let file: UploadedFile =
            serde_json::from_str(r#"{"ufsUrl":"  ","url":"https://x/legacy.pdf"}"#)?;
        assert_eq!(file.file_url(), Some("https://x/legacy.pdf"));

        let file: UploadedFile = serde_json::from_str(
            r#"{"ufsUrl":"https://x/new.pdf","url":"https://x/legacy.pdf"}"#,
        )?;
        assert_eq!(file.file_url(), Some("https://x/new.pdf"));
        Ok(())
    }

    #[test]
    fn record_without_url_has_none() -> Result<()> {
        let file: UploadedFile = serde_json::from_str(r#"{"name":"file.png"}"#)?;
        assert_eq!(file.file_url(), None);
        Ok(())
    }

    #[test]
    fn preview_kind_by_mime() {
        assert_eq!(PreviewKind::for_mime(Some("image/png")), PreviewKind::Image);
        assert_eq!(PreviewKind::for_mime(Some("IMAGE/JPEG")), PreviewKind::Image);
        assert_eq!(PreviewKind::for_mime(Some("application/pdf")), PreviewKind::Pdf);
        assert_eq!(
            PreviewKind::for_mime(Some("application/msword")),
            PreviewKind::Link
        );
        assert_eq!(PreviewKind::for_mime(None), PreviewKind::Link);
    }

    #[test]
    fn check_file_limits_type_and_size() {
        assert_eq!(check_file("image/jpeg", 2048), Ok(()));
        assert_eq!(check_file("application/pdf", MAX_UPLOAD_BYTES), Ok(()));
        assert_eq!(
            check_file("application/pdf", MAX_UPLOAD_BYTES + 1),
            Err(FileRejection::TooLarge)
        );
        assert_eq!(
            check_file("text/plain", 10),
            Err(FileRejection::UnsupportedType)
        );
        assert_eq!(check_file("", 10), Err(FileRejection::UnsupportedType));
        assert_eq!(check_file("image/png", 0), Err(FileRejection::Empty));
    }
}
