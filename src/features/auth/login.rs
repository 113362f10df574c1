//! Sign-in workflow: validate, call the credentials provider once, then
//! record the session and navigate, or notify. No retries; the user re-submits.

use super::{
    schema::validate_credentials,
    types::{LoginField, LoginForm, SignInRequest, SignInResponse, UserSession},
};
use crate::{
    app_lib::{AppError, paths},
    features::{
        effects::{Navigator, Notifier},
        forms::FieldErrors,
    },
};
use tracing::{info, warn};

pub const SIGNED_IN: &str = "Signed in successfully";
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";
pub const SIGN_IN_FAILED: &str = "Unable to sign in right now. Please try again.";

/// Credential sign-in collaborator. Invalid credentials come back as
/// `ok: false`, not as an error.
pub trait Authenticator {
    async fn sign_in(&self, request: &SignInRequest<'_>) -> Result<SignInResponse, AppError>;
}

/// Holds the signed-in session. It must be written before navigating so the
/// destination route already sees it.
pub trait SessionStore {
    fn store(&self, session: UserSession);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    Invalid(FieldErrors<LoginField>),
    Rejected,
    Failed(AppError),
    SignedIn(UserSession),
}

/// Runs one sign-in attempt for the submitted form.
pub async fn submit_login(
    form: &LoginForm,
    authenticator: &impl Authenticator,
    sessions: &impl SessionStore,
    notifier: &impl Notifier,
    navigator: &impl Navigator,
) -> LoginOutcome {
    let credentials = match validate_credentials(form) {
        Ok(credentials) => credentials,
        Err(errors) => return LoginOutcome::Invalid(errors),
    };

    match authenticator.sign_in(&SignInRequest::new(&credentials)).await {
        Ok(response) if response.ok => {
            info!("Sign-in accepted");
            let session = UserSession {
                email: credentials.email,
                role: credentials.role,
            };
            sessions.store(session.clone());
            notifier.success(SIGNED_IN);
            navigator.navigate(paths::PROFILE);
            LoginOutcome::SignedIn(session)
        }
        Ok(response) => {
            info!(reason = ?response.error, "Sign-in rejected");
            notifier.error(INVALID_CREDENTIALS);
            LoginOutcome::Rejected
        }
        Err(err) => {
            warn!(error = %err, "Sign-in request failed");
            notifier.error(SIGN_IN_FAILED);
            LoginOutcome::Failed(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::test_support::{
        FakeAuthenticator, RecordingNavigator, RecordingNotifier, RecordingSessions,
    };
    use std::cell::RefCell;
    use crate::features::auth::types::Role;
    use serde_json::json;

    fn form(email: &str, password: &str) -> LoginForm {
        LoginForm {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn invalid_input_never_reaches_authenticator() {
        let authenticator = FakeAuthenticator::accepting();
        let notifier = RecordingNotifier::default();
        let navigator = RecordingNavigator::default();
        let sessions = RecordingSessions::default();

        for (email, password) in [("", "secret"), ("alum@college", "secret"), ("a@b.co", "  ")] {
            let outcome = submit_login(
                &form(email, password),
                &authenticator,
                &sessions,
                &notifier,
                &navigator,
            )
            .await;
            assert!(matches!(outcome, LoginOutcome::Invalid(_)), "{email:?}/{password:?}");
        }

        assert!(authenticator.requests().is_empty());
        assert!(sessions.stored().is_empty());
        assert!(notifier.notices().is_empty());
        assert!(navigator.visits().is_empty());
    }

    #[tokio::test]
    async fn accepted_sign_in_navigates_to_profile() {
        let authenticator = FakeAuthenticator::accepting();
        let notifier = RecordingNotifier::default();
        let navigator = RecordingNavigator::default();
        let sessions = RecordingSessions::default();

        let outcome = submit_login(
            &form("Alum@College.edu ", "hunter22"),
            &authenticator,
            &sessions,
            &notifier,
            &navigator,
        )
        .await;

        assert_eq!(
            outcome,
            LoginOutcome::SignedIn(UserSession {
                email: "alum@college.edu".to_string(),
                role: Role::Alumni,
            })
        );
        assert_eq!(
            authenticator.requests(),
            vec![json!({
                "email": "alum@college.edu",
                "password": "hunter22",
                "role": "alumni",
                "redirect": false
            })]
        );
        assert_eq!(notifier.successes(), vec![SIGNED_IN.to_string()]);
        assert_eq!(navigator.visits(), vec!["/profile".to_string()]);
    }

    #[tokio::test]
    async fn session_is_stored_before_navigation() {
        let authenticator = FakeAuthenticator::accepting();
        let notifier = RecordingNotifier::default();
        let sessions = RecordingSessions::default();
        let visits = RefCell::new(Vec::new());
        let navigator = |path: &str| {
            visits
                .borrow_mut()
                .push((path.to_string(), sessions.stored()));
        };

        submit_login(
            &form("alum@college.edu", "hunter22"),
            &authenticator,
            &sessions,
            &notifier,
            &navigator,
        )
        .await;

        let expected = UserSession {
            email: "alum@college.edu".to_string(),
            role: Role::Alumni,
        };
        assert_eq!(sessions.stored(), vec![expected.clone()]);
        assert_eq!(
            visits.into_inner(),
            vec![("/profile".to_string(), vec![expected])]
        );
    }

    #[tokio::test]
    async fn rejected_sign_in_stays_on_page() {
        let authenticator = FakeAuthenticator::rejecting();
        let notifier = RecordingNotifier::default();
        let navigator = RecordingNavigator::default();
        let sessions = RecordingSessions::default();

        let outcome = submit_login(
            &form("a@b.co", "wrong"),
            &authenticator,
            &sessions,
            &notifier,
            &navigator,
        )
        .await;

        assert_eq!(outcome, LoginOutcome::Rejected);
        assert!(sessions.stored().is_empty());
        assert_eq!(notifier.errors(), vec![INVALID_CREDENTIALS.to_string()]);
        assert!(navigator.visits().is_empty());
    }

    #[tokio::test]
    async fn transport_error_is_reported_once() {
        let authenticator = FakeAuthenticator::answering(Err(AppError::Timeout(
            "Request timed out. Please try again.".to_string(),
        )));
        let notifier = RecordingNotifier::default();
        let navigator = RecordingNavigator::default();
        let sessions = RecordingSessions::default();

        let outcome = submit_login(
            &form("a@b.co", "secret"),
            &authenticator,
            &sessions,
            &notifier,
            &navigator,
        )
        .await;

        assert!(matches!(outcome, LoginOutcome::Failed(AppError::Timeout(_))));
        assert_eq!(authenticator.requests().len(), 1);
        assert!(sessions.stored().is_empty());
        assert_eq!(notifier.errors(), vec![SIGN_IN_FAILED.to_string()]);
        assert!(navigator.visits().is_empty());
    }
}
