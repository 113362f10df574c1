//! Registration controller state and submission. The draft is mutated
//! synchronously by the form (field edits, upload results, submit gating),
//! while the network call runs on a validated profile so the UI never holds
//! the draft across an await.
//!
//! Flow Overview: `begin_submit` gates on the proof URL and the schema and sets
//! the submitting flag, `register_profile` posts once and notifies, `finish`
//! always clears the flag and resets the draft after a successful registration.

use super::{
    schema::{build_profile, validate_form},
    types::{RegistrationField, RegistrationForm, RegistrationProfile, RegistrationRequest},
};
use crate::{
    app_lib::{AppError, paths},
    features::{
        effects::{Navigator, Notifier},
        forms::FieldErrors,
    },
};
use std::collections::BTreeSet;
use tracing::{info, warn};

pub const REGISTERED: &str = "Registration successful. Please sign in.";
pub const REGISTRATION_FAILED: &str = "Registration failed. Please try again.";
pub const PROOF_REQUIRED: &str = "Please upload your proof document before registering.";

/// Account registration collaborator. Returns the HTTP status of a
/// successful response.
pub trait Registrar {
    async fn register(&self, request: &RegistrationRequest<'_>) -> Result<u16, AppError>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitBlocked {
    InFlight,
    MissingProof,
    Invalid,
}

impl SubmitBlocked {
    /// Only a missing proof document gets a notification; field errors are
    /// already shown inline.
    pub fn report(&self, notifier: &impl Notifier) {
        if *self == SubmitBlocked::MissingProof {
            notifier.error(PROOF_REQUIRED);
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistrationOutcome {
    Registered,
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    form: RegistrationForm,
    errors: FieldErrors<RegistrationField>,
    touched: BTreeSet<RegistrationField>,
    proof_url: Option<String>,
    submitting: bool,
}

impl RegistrationDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    pub fn value(&self, field: RegistrationField) -> &str {
        self.form.get(field)
    }

    /// Stores the edit and re-validates the whole form.
    pub fn set_field(&mut self, field: RegistrationField, value: String) {
        self.form.set(field, value);
        self.touched.insert(field);
        self.errors = validate_form(&self.form);
    }

    /// Error to display for a field; untouched fields stay quiet until the
    /// first submit attempt.
    pub fn error_for(&self, field: RegistrationField) -> Option<&str> {
        if self.touched.contains(&field) {
            self.errors.get(field)
        } else {
            None
        }
    }

    /// Receives the upload sub-controller's report.
    pub fn set_proof_url(&mut self, url: Option<String>) {
        self.proof_url = url;
    }

    pub fn proof_url(&self) -> Option<&str> {
        self.proof_url.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Submit control state: needs an uploaded proof and no request in flight.
    pub fn can_submit(&self) -> bool {
        self.proof_url.is_some() && !self.submitting
    }

    /// Gates the submission and marks the draft as submitting.
    pub fn begin_submit(&mut self) -> Result<RegistrationProfile, SubmitBlocked> {
        if self.submitting {
            return Err(SubmitBlocked::InFlight);
        }
        let Some(proof_url) = self.proof_url.as_deref() else {
            return Err(SubmitBlocked::MissingProof);
        };

        self.touched.extend(RegistrationField::ALL);
        match build_profile(&self.form, proof_url) {
            Ok(profile) => {
                self.errors = FieldErrors::new();
                self.submitting = true;
                Ok(profile)
            }
            Err(errors) => {
                self.errors = errors;
                Err(SubmitBlocked::Invalid)
            }
        }
    }

    /// Final step of every submission.
    pub fn finish(&mut self, outcome: &RegistrationOutcome) {
        self.submitting = false;
        if *outcome == RegistrationOutcome::Registered {
            *self = Self::default();
        }
    }
}

/// Posts the profile once; on success navigates to the sign-in page.
pub async fn register_profile(
    profile: &RegistrationProfile,
    registrar: &impl Registrar,
    notifier: &impl Notifier,
    navigator: &impl Navigator,
) -> RegistrationOutcome {
    match registrar.register(&RegistrationRequest::new(profile)).await {
        Ok(200) => {
            info!(branch = profile.branch.code(), "Registration accepted");
            notifier.success(REGISTERED);
            navigator.navigate(paths::LOGIN);
            RegistrationOutcome::Registered
        }
        Ok(status) => {
            warn!(status, "Unexpected registration status");
            notifier.error(REGISTRATION_FAILED);
            RegistrationOutcome::Failed(REGISTRATION_FAILED.to_string())
        }
        Err(err) => {
            warn!(error = %err, "Registration request failed");
            let message = err
                .server_message()
                .unwrap_or_else(|| REGISTRATION_FAILED.to_string());
            notifier.error(&message);
            RegistrationOutcome::Failed(message)
        }
    }
}
