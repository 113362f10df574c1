//! Shared UI components exported for routes and features.

mod document_upload;
pub(crate) mod layout;
pub(crate) mod ui;

pub(crate) use document_upload::DocumentUploader;
pub(crate) use layout::AppShell;
pub(crate) use ui::{
    Alert, Button, SelectField, Spinner, TextField, ToastProvider, use_toasts,
};
