//! Field validation rules for the new password and confirm password fields.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::evaluator::evaluate_criteria;
use crate::sections::contains_only_allowed_characters;

/// Why a field failed validation. `Display` is the message shown to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("Enter your password")]
    EmptyInput,
    #[error("Enter valid special chars (.,@:?!()$^%&\\/#) with no spaces")]
    InvalidCharacter,
    #[error("Your password must meet the requirements below")]
    CriteriaNotMet,
    #[error("Passwords do not match")]
    Mismatch,
}

/// The two fields of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    NewPassword,
    ConfirmPassword,
}

/// Outcome of a field rule as the UI consumes it.
///
/// `message` is empty when `valid` is `true`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValidation {
    pub valid: bool,
    pub message: String,
    error: Option<FieldError>,
}

impl FieldValidation {
    pub fn valid() -> Self {
        Self {
            valid: true,
            message: String::new(),
            error: None,
        }
    }

    /// Typed reason for the failure, `None` when valid.
    pub fn error(&self) -> Option<FieldError> {
        self.error
    }
}

impl From<Result<(), FieldError>> for FieldValidation {
    fn from(result: Result<(), FieldError>) -> Self {
        match result {
            Ok(()) => Self::valid(),
            Err(e) => Self {
                valid: false,
                message: e.to_string(),
                error: Some(e),
            },
        }
    }
}

/// What a rule may read besides its own field's text.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationContext<'a> {
    /// Current text of the new password field.
    pub new_password: Option<&'a SecretString>,
}

fn non_empty(text: Option<&SecretString>) -> Result<&SecretString, FieldError> {
    match text {
        Some(t) if !t.expose_secret().is_empty() => Ok(t),
        _ => Err(FieldError::EmptyInput),
    }
}

/// Rule for the new password field.
///
/// Checked in order, first failure wins: empty, character-set gate,
/// criteria pass.
pub fn validate_new_password(text: Option<&SecretString>) -> Result<(), FieldError> {
    let text = non_empty(text)?;
    if !contains_only_allowed_characters(text) {
        return Err(FieldError::InvalidCharacter);
    }
    if !evaluate_criteria(text).passes() {
        return Err(FieldError::CriteriaNotMet);
    }
    Ok(())
}

/// Rule for the confirm password field: non-empty, then equal to the new
/// password's current text from `context`.
pub fn validate_confirm_password(
    text: Option<&SecretString>,
    context: &ValidationContext<'_>,
) -> Result<(), FieldError> {
    let text = non_empty(text)?;
    let new_password = context
        .new_password
        .map(|p| p.expose_secret())
        .unwrap_or_default();
    if text.expose_secret() != new_password {
        return Err(FieldError::Mismatch);
    }
    Ok(())
}

/// Runs the rule belonging to `field`.
pub fn validate_field(
    field: FieldId,
    text: Option<&SecretString>,
    context: &ValidationContext<'_>,
) -> FieldValidation {
    match field {
        FieldId::NewPassword => validate_new_password(text),
        FieldId::ConfirmPassword => validate_confirm_password(text, context),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_PASSWORD: &str = "12345678Aa!";
    const TOO_SHORT: &str = "1234Aa!";

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_new_password_empty() {
        let empty = secret("");
        for text in [None, Some(&empty)] {
            let v = validate_field(FieldId::NewPassword, text, &ValidationContext::default());
            assert!(!v.valid);
            assert_eq!(v.error(), Some(FieldError::EmptyInput));
            assert_eq!(v.message, "Enter your password");
        }
    }

    #[test]
    fn test_new_password_invalid_characters() {
        let pwd = secret("🕹");
        let v = validate_field(FieldId::NewPassword, Some(&pwd), &ValidationContext::default());
        assert_eq!(v.error(), Some(FieldError::InvalidCharacter));
        assert_eq!(
            v.message,
            "Enter valid special chars (.,@:?!()$^%&\\/#) with no spaces"
        );
    }

    #[test]
    fn test_new_password_gate_before_criteria() {
        // meets every criterion except the whitelist
        let pwd = secret("12345678Aa!*");
        assert_eq!(validate_new_password(Some(&pwd)), Err(FieldError::InvalidCharacter));

        let spaced = secret("1234 5678Aa!");
        assert_eq!(validate_new_password(Some(&spaced)), Err(FieldError::InvalidCharacter));
    }

    #[test]
    fn test_new_password_criteria_not_met() {
        let pwd = secret(TOO_SHORT);
        let v = validate_field(FieldId::NewPassword, Some(&pwd), &ValidationContext::default());
        assert_eq!(v.error(), Some(FieldError::CriteriaNotMet));
        assert_eq!(v.message, "Your password must meet the requirements below");

        let two_of_four = secret("12345678A");
        assert_eq!(validate_new_password(Some(&two_of_four)), Err(FieldError::CriteriaNotMet));
    }

    #[test]
    fn test_new_password_valid() {
        let pwd = secret(VALID_PASSWORD);
        let v = validate_field(FieldId::NewPassword, Some(&pwd), &ValidationContext::default());
        assert!(v.valid);
        assert!(v.message.is_empty());
        assert_eq!(v.error(), None);
    }

    #[test]
    fn test_confirm_empty() {
        let new_password = secret(VALID_PASSWORD);
        let ctx = ValidationContext { new_password: Some(&new_password) };
        let v = validate_field(FieldId::ConfirmPassword, None, &ctx);
        assert_eq!(v.error(), Some(FieldError::EmptyInput));
        assert_eq!(v.message, "Enter your password");
    }

    #[test]
    fn test_confirm_mismatch() {
        let new_password = secret(VALID_PASSWORD);
        let confirm = secret(TOO_SHORT);
        let ctx = ValidationContext { new_password: Some(&new_password) };
        let v = validate_field(FieldId::ConfirmPassword, Some(&confirm), &ctx);
        assert_eq!(v.error(), Some(FieldError::Mismatch));
        assert_eq!(v.message, "Passwords do not match");
    }

    #[test]
    fn test_confirm_match() {
        let new_password = secret(VALID_PASSWORD);
        let confirm = secret(VALID_PASSWORD);
        let ctx = ValidationContext { new_password: Some(&new_password) };
        let v = validate_field(FieldId::ConfirmPassword, Some(&confirm), &ctx);
        assert!(v.valid);
        assert!(v.message.is_empty());
    }

    #[test]
    fn test_confirm_uses_context_not_criteria() {
        // confirm rule only compares, it does not re-check criteria
        let new_password = secret("weak");
        let confirm = secret("weak");
        let ctx = ValidationContext { new_password: Some(&new_password) };
        assert_eq!(validate_confirm_password(Some(&confirm), &ctx), Ok(()));
    }

    #[test]
    fn test_confirm_without_new_password_mismatches() {
        let confirm = secret(VALID_PASSWORD);
        assert_eq!(
            validate_confirm_password(Some(&confirm), &ValidationContext::default()),
            Err(FieldError::Mismatch)
        );
    }
}
