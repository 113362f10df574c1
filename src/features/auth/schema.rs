//! Credential schema for the sign-in form.

use super::types::{LoginCredentials, LoginField, LoginForm, Role};
use crate::features::forms::{FieldErrors, check_email};
use secrecy::SecretString;

/// Validates the sign-in form and returns credentials ready to submit.
pub fn validate_credentials(form: &LoginForm) -> Result<LoginCredentials, FieldErrors<LoginField>> {
    let mut errors = FieldErrors::new();
    let email = check_email(&mut errors, LoginField::Email, &form.email);
    errors.require(LoginField::Password, &form.password, "Password is required");

    errors.into_result(()).map(|()| LoginCredentials {
        email,
        password: SecretString::from(form.password.clone()),
        role: Role::Alumni,
    })
}
