//! Profile schema for the registration form.

use super::types::{Branch, RegistrationField, RegistrationForm, RegistrationProfile};
use crate::features::{
    auth::types::Role,
    forms::{FieldErrors, check_email},
};
use regex::Regex;
use secrecy::SecretString;
use std::sync::LazyLock;

static MOBILE_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").ok());

pub const MIN_GRAD_YEAR: u16 = 1964;
pub const MAX_GRAD_YEAR: u16 = 2030;
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Checks every field and returns all messages at once.
pub fn validate_form(form: &RegistrationForm) -> FieldErrors<RegistrationField> {
    let mut errors = FieldErrors::new();
    check_fields(form, &mut errors);
    errors
}

/// Validates the form and combines it with the uploaded proof URL.
pub fn build_profile(
    form: &RegistrationForm,
    proof_picture: &str,
) -> Result<RegistrationProfile, FieldErrors<RegistrationField>> {
    let mut errors = FieldErrors::new();
    let checked = check_fields(form, &mut errors);

    errors.into_result(checked).and_then(|checked| {
        let (Some(grad_year), Some(branch)) = (checked.grad_year, checked.branch) else {
            // Unreachable when no field errors were recorded.
            return Err(validate_form(form));
        };
        Ok(RegistrationProfile {
            full_name: form.full_name.trim().to_string(),
            grad_year,
            branch,
            email: checked.email,
            mobile: form.mobile.trim().to_string(),
            organisation: form.organisation.trim().to_string(),
            designation: form.designation.trim().to_string(),
            password: SecretString::from(form.password.clone()),
            role: Role::Alumni,
            proof_picture: proof_picture.to_string(),
            location: form.location.trim().to_string(),
        })
    })
}

struct CheckedFields {
    grad_year: Option<u16>,
    branch: Option<Branch>,
    email: String,
}

fn check_fields(form: &RegistrationForm, errors: &mut FieldErrors<RegistrationField>) -> CheckedFields {
    errors.require(RegistrationField::FullName, &form.full_name, "Full name is required");

    let grad_year = check_grad_year(errors, &form.grad_year);

    let branch = Branch::from_code(&form.branch);
    if branch.is_none() {
        errors.insert(RegistrationField::Branch, "Select your branch");
    }

    let email = check_email(errors, RegistrationField::Email, &form.email);

    if !valid_mobile(form.mobile.trim()) {
        errors.insert(RegistrationField::Mobile, "Mobile number must be exactly 10 digits");
    }

    errors.require(
        RegistrationField::Organisation,
        &form.organisation,
        "Organisation is required",
    );
    errors.require(
        RegistrationField::Designation,
        &form.designation,
        "Designation is required",
    );

    // Surrounding whitespace does not count towards the minimum.
    if form.password.trim().chars().count() < MIN_PASSWORD_LENGTH {
        errors.insert(
            RegistrationField::Password,
            format!("Password must be at least {MIN_PASSWORD_LENGTH} characters"),
        );
    }

    errors.require(RegistrationField::Location, &form.location, "Location is required");

    CheckedFields {
        grad_year,
        branch,
        email,
    }
}

fn check_grad_year(errors: &mut FieldErrors<RegistrationField>, raw: &str) -> Option<u16> {
    if !errors.require(RegistrationField::GradYear, raw, "Graduation year is required") {
        return None;
    }
    match raw.trim().parse::<u16>() {
        Ok(year) if (MIN_GRAD_YEAR..=MAX_GRAD_YEAR).contains(&year) => Some(year),
        Ok(_) => {
            errors.insert(
                RegistrationField::GradYear,
                format!("Graduation year must be between {MIN_GRAD_YEAR} and {MAX_GRAD_YEAR}"),
            );
            None
        }
        Err(_) => {
            errors.insert(RegistrationField::GradYear, "Enter a valid year");
            None
        }
    }
}

fn valid_mobile(mobile: &str) -> bool {
    MOBILE_PATTERN
        .as_ref()
        .is_some_and(|regex| regex.is_match(mobile))
}
