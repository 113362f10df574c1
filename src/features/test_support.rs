//! Recording fakes for the workflow collaborators.

use crate::{
    app_lib::AppError,
    features::{
        auth::{
            login::{Authenticator, SessionStore},
            types::{SignInRequest, SignInResponse, UserSession},
        },
        effects::{Navigator, NoticeKind, Notifier},
        registration::{types::RegistrationRequest, workflow::Registrar},
    },
};
use serde_json::Value;
use std::cell::RefCell;

#[derive(Default)]
pub struct RecordingNotifier {
    notices: RefCell<Vec<(NoticeKind, String)>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<(NoticeKind, String)> {
        self.notices.borrow().clone()
    }

    pub fn messages(&self, kind: NoticeKind) -> Vec<String> {
        self.notices
            .borrow()
            .iter()
            .filter(|(notice_kind, _)| *notice_kind == kind)
            .map(|(_, message)| message.clone())
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.messages(NoticeKind::Error)
    }

    pub fn successes(&self) -> Vec<String> {
        self.messages(NoticeKind::Success)
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        self.notices.borrow_mut().push((kind, message.to_string()));
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    visits: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub fn visits(&self) -> Vec<String> {
        self.visits.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visits.borrow_mut().push(path.to_string());
    }
}

#[derive(Default)]
pub struct RecordingSessions {
    stored: RefCell<Vec<UserSession>>,
}

impl RecordingSessions {
    pub fn stored(&self) -> Vec<UserSession> {
        self.stored.borrow().clone()
    }
}

impl SessionStore for RecordingSessions {
    fn store(&self, session: UserSession) {
        self.stored.borrow_mut().push(session);
    }
}

/// Answers every sign-in with a fixed result and keeps the JSON it was sent.
pub struct FakeAuthenticator {
    response: Result<SignInResponse, AppError>,
    requests: RefCell<Vec<Value>>,
}

impl FakeAuthenticator {
    pub fn accepting() -> Self {
        Self::answering(Ok(SignInResponse {
            ok: true,
            ..SignInResponse::default()
        }))
    }

    pub fn rejecting() -> Self {
        Self::answering(Ok(SignInResponse {
            ok: false,
            error: Some("CredentialsSignin".to_string()),
            url: None,
        }))
    }

    pub fn answering(response: Result<SignInResponse, AppError>) -> Self {
        Self {
            response,
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<Value> {
        self.requests.borrow().clone()
    }
}

impl Authenticator for FakeAuthenticator {
    async fn sign_in(&self, request: &SignInRequest<'_>) -> Result<SignInResponse, AppError> {
        let body = serde_json::to_value(request).unwrap_or(Value::Null);
        self.requests.borrow_mut().push(body);
        self.response.clone()
    }
}

/// Answers every registration with a fixed status or error.
pub struct FakeRegistrar {
    response: Result<u16, AppError>,
    requests: RefCell<Vec<Value>>,
}

impl FakeRegistrar {
    pub fn answering(response: Result<u16, AppError>) -> Self {
        Self {
            response,
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<Value> {
        self.requests.borrow().clone()
    }
}

impl Registrar for FakeRegistrar {
    async fn register(&self, request: &RegistrationRequest<'_>) -> Result<u16, AppError> {
        let body = serde_json::to_value(request).unwrap_or(Value::Null);
        self.requests.borrow_mut().push(body);
        self.response.clone()
    }
}
