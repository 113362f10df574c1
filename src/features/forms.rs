//! Field-level validation helpers shared by the sign-in and registration forms.

use regex::Regex;
use std::{collections::BTreeMap, sync::LazyLock};

static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").ok());

/// Validation messages keyed by form field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldErrors<F: Ord>(BTreeMap<F, String>);

impl<F: Ord> Default for FieldErrors<F> {
    fn default() -> Self {
        Self(BTreeMap::new())
    }
}

impl<F: Ord + Copy> FieldErrors<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message; the first message for a field wins.
    pub fn insert(&mut self, field: F, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: F) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: F) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = F> + '_ {
        self.0.keys().copied()
    }

    /// Flags the field when the trimmed value is empty.
    pub fn require(&mut self, field: F, value: &str, message: &str) -> bool {
        if value.trim().is_empty() {
            self.insert(field, message);
            false
        } else {
            true
        }
    }

    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

/// Normalize an email for submission.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Basic email format check on already-normalized input.
pub fn valid_email(email_normalized: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .is_some_and(|regex| regex.is_match(email_normalized))
}

/// Validates an email field and returns the normalized value when it passes.
pub fn check_email<F: Ord + Copy>(errors: &mut FieldErrors<F>, field: F, raw: &str) -> String {
    let email = normalize_email(raw);
    if errors.require(field, &email, "Email is required") && !valid_email(&email) {
        errors.insert(field, "Enter a valid email address");
    }
    email
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
    enum Field {
        Name,
        Email,
    }

    #[test]
    fn first_message_wins() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::Name, "first");
        errors.insert(Field::Name, "second");
        assert_eq!(errors.get(Field::Name), Some("first"));
        assert!(!errors.contains(Field::Email));
    }

    #[test]
    fn require_flags_blank_values() {
        let mut errors = FieldErrors::new();
        assert!(!errors.require(Field::Name, "   ", "Name is required"));
        assert!(errors.require(Field::Email, "a@b.co", "Email is required"));
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![Field::Name]);
    }

    #[test]
    fn into_result_passes_value_through_when_clean() {
        let errors: FieldErrors<Field> = FieldErrors::new();
        assert_eq!(errors.into_result(7), Ok(7));

        let mut errors = FieldErrors::new();
        errors.insert(Field::Email, "bad");
        assert!(errors.into_result(7).is_err());
    }

    #[test]
    fn email_validation() {
        assert!(valid_email("alum@college.edu"));
        assert!(!valid_email("alum@college"));
        assert!(!valid_email("alum college@edu.in"));
        assert!(!valid_email(""));
    }

    #[test]
    fn email_pattern_compiles_once() {
        assert!(super::EMAIL_PATTERN.is_some());
        assert!(valid_email("first@college.edu") && valid_email("second@college.edu"));
    }

    #[test]
    fn check_email_normalizes_and_reports() {
        let mut errors = FieldErrors::new();
        assert_eq!(
            check_email(&mut errors, Field::Email, "  Alum@College.EDU "),
            "alum@college.edu"
        );
        assert!(errors.is_empty());

        check_email(&mut errors, Field::Email, "");
        assert_eq!(errors.get(Field::Email), Some("Email is required"));

        let mut errors = FieldErrors::new();
        check_email(&mut errors, Field::Email, "nope");
        assert_eq!(errors.get(Field::Email), Some("Enter a valid email address"));
    }
}
