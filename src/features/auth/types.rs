//! Request and response types for credential sign-in. Credentials carry the
//! password as a secret so it never shows up in `Debug` output or logs.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Account role; this directory only signs in and registers alumni.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Alumni,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Alumni => "alumni",
        }
    }
}

/// Raw sign-in form state as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LoginField {
    Email,
    Password,
}

/// Validated credentials, alive only for the duration of a submission.
#[derive(Debug)]
pub struct LoginCredentials {
    pub email: String,
    pub password: SecretString,
    pub role: Role,
}

/// Body of the credentials sign-in call. Redirects are always disabled so the
/// client decides where to navigate.
#[derive(Serialize)]
pub struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
    role: Role,
    redirect: bool,
}

impl<'a> SignInRequest<'a> {
    pub fn new(credentials: &'a LoginCredentials) -> Self {
        Self {
            email: &credentials.email,
            password: credentials.password.expose_secret(),
            role: credentials.role,
            redirect: false,
        }
    }
}

/// Result of the sign-in call. A missing `ok` field counts as a rejection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SignInResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// In-memory summary of the signed-in account. Holds no secrets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserSession {
    pub email: String,
    pub role: Role,
}
