// src/domain/validation.rs
//! Per-field input validation for the editor and login forms.
//!
//! Every function here is pure and total: it inspects a single string and
//! returns a fresh [`FieldValidation`]. Nothing throws; callers gate
//! submission on the results.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Length must be greater than zero.")]
    EmptyField,
    #[error("Cannot have slashes in URL ID.")]
    InvalidCharacter,
    #[error("You need a username")]
    UsernameMissing,
    // The message text predates the limit bump from 20 to 50 characters.
    #[error("Username cannot be longer than 20 characters.")]
    UsernameTooLong,
    #[error("You need a password")]
    PasswordMissing,
    #[error("Password cannot be longer than 50 characters.")]
    PasswordTooLong,
}

/// Outcome of a single validator call. Superseded wholesale by the next
/// pass over the same field, never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldValidation(Option<FieldError>);

impl FieldValidation {
    pub const fn pass() -> Self {
        Self(None)
    }

    pub const fn fail(error: FieldError) -> Self {
        Self(Some(error))
    }

    pub const fn is_valid(&self) -> bool {
        self.0.is_none()
    }

    pub const fn error(&self) -> Option<&FieldError> {
        self.0.as_ref()
    }

    /// Inline error text for the field, empty when the field is valid.
    pub fn message(&self) -> String {
        self.0.as_ref().map(ToString::to_string).unwrap_or_default()
    }
}

const CREDENTIAL_MAX_CHARS: usize = 50;

/// URL identifiers are path segments; a slash would split them.
pub fn validate_url_id(candidate: &str) -> FieldValidation {
    if candidate.is_empty() {
        FieldValidation::fail(FieldError::EmptyField)
    } else if candidate.contains('/') {
        FieldValidation::fail(FieldError::InvalidCharacter)
    } else {
        FieldValidation::pass()
    }
}

/// No maximum length is enforced on titles.
pub fn validate_title(candidate: &str) -> FieldValidation {
    if candidate.is_empty() {
        FieldValidation::fail(FieldError::EmptyField)
    } else {
        FieldValidation::pass()
    }
}

pub fn validate_description(candidate: &str) -> FieldValidation {
    if candidate.is_empty() {
        FieldValidation::fail(FieldError::EmptyField)
    } else {
        FieldValidation::pass()
    }
}

/// Always passes. Disallowed elements never reach storage anyway: the
/// sanitizer strips them structurally before content is persisted.
pub fn validate_content(_candidate: &str) -> FieldValidation {
    FieldValidation::pass()
}

pub fn validate_username(candidate: &str) -> FieldValidation {
    if candidate.is_empty() {
        FieldValidation::fail(FieldError::UsernameMissing)
    } else if candidate.chars().count() > CREDENTIAL_MAX_CHARS {
        FieldValidation::fail(FieldError::UsernameTooLong)
    } else {
        FieldValidation::pass()
    }
}

pub fn validate_password(candidate: &str) -> FieldValidation {
    if candidate.is_empty() {
        FieldValidation::fail(FieldError::PasswordMissing)
    } else if candidate.chars().count() > CREDENTIAL_MAX_CHARS {
        FieldValidation::fail(FieldError::PasswordTooLong)
    } else {
        FieldValidation::pass()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_id_rejects_empty() {
        let result = validate_url_id("");
        assert!(!result.is_valid());
        assert_eq!(result.message(), "Length must be greater than zero.");
    }

    #[test]
    fn url_id_rejects_slashes_anywhere() {
        for candidate in ["my/article", "/leading", "trailing/", "a/b/c"] {
            let result = validate_url_id(candidate);
            assert!(!result.is_valid(), "{candidate} should be rejected");
            assert_eq!(result.message(), "Cannot have slashes in URL ID.");
        }
    }

    #[test]
    fn url_id_accepts_hyphenated() {
        assert!(validate_url_id("my-first-article").is_valid());
    }

    #[test]
    fn title_and_description_reject_empty_only() {
        let validators: [fn(&str) -> FieldValidation; 2] = [validate_title, validate_description];
        for validate in validators {
            let empty = validate("");
            assert_eq!(empty.error(), Some(&FieldError::EmptyField));
            assert!(validate("x").is_valid());
            assert!(validate(&"long ".repeat(500)).is_valid());
        }
    }

    #[test]
    fn content_always_passes() {
        assert!(validate_content("").is_valid());
        assert!(validate_content("<script>alert(1)</script>").is_valid());
    }

    #[test]
    fn username_bounds() {
        assert_eq!(
            validate_username("").message(),
            "You need a username"
        );
        assert!(validate_username(&"a".repeat(50)).is_valid());
        // Enforced bound is 50 even though the message claims 20.
        assert_eq!(
            validate_username(&"a".repeat(51)).message(),
            "Username cannot be longer than 20 characters."
        );
    }

    #[test]
    fn password_bounds() {
        assert_eq!(validate_password("").message(), "You need a password");
        assert!(validate_password(&"p".repeat(50)).is_valid());
        assert_eq!(
            validate_password(&"p".repeat(51)).message(),
            "Password cannot be longer than 50 characters."
        );
    }

    #[test]
    fn validations_are_fresh_values() {
        let first = validate_title("");
        let second = validate_title("ok");
        assert!(!first.is_valid());
        assert!(second.is_valid());
        assert_eq!(first.message(), "Length must be greater than zero.");
    }
}
