//! Password reset form validation library
//!
//! This library provides the validation core of a "set / reset password"
//! form: live criteria feedback for the new password, a confirm field
//! checked against it, and a submit decision over both.
//!
//! # Features
//!
//! - `async` (default): Enables the channel-driven form event loop
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_FORM_NEW_PLACEHOLDER`, `PWD_FORM_CONFIRM_PLACEHOLDER`:
//!   field placeholders (default: `New password`, `Re-enter new password`)
//! - `PWD_FORM_SUCCESS_TITLE`, `PWD_FORM_SUCCESS_MESSAGE`:
//!   success notification copy
//!
//! # Example
//!
//! ```rust
//! use pwd_reset_form::{FieldId, FormConfig, Marker, Criterion, Outcome, ValidationController};
//! use secrecy::SecretString;
//!
//! let mut form = ValidationController::new(FormConfig::from_env());
//!
//! // Typing: only checkmarks, never failures
//! form.focus(FieldId::NewPassword);
//! form.text_changed(FieldId::NewPassword, SecretString::new("123Aa!".to_string().into()));
//! assert_eq!(form.display().marker(Criterion::Length), Marker::Neutral);
//!
//! // Leaving the field shows what is missing
//! form.blur(FieldId::NewPassword);
//! assert_eq!(form.display().marker(Criterion::Length), Marker::Failure);
//!
//! let password = "12345678Aa!";
//! form.text_changed(FieldId::NewPassword, SecretString::new(password.to_string().into()));
//! form.text_changed(FieldId::ConfirmPassword, SecretString::new(password.to_string().into()));
//! assert_eq!(form.submit(), Outcome::Success);
//! println!("{:?}", form.take_notice());
//! ```

// Internal modules
mod config;
mod controller;
mod display;
mod evaluator;
mod rules;
mod sections;

// Public API
pub use config::FormConfig;
pub use controller::{
    submit_form, FieldSnapshot, FieldState, FormEvent, FormSnapshot, FormState, Outcome,
    SubmitReport, SuccessNotice, ValidationController,
};
pub use display::{DisplayMode, DisplayModel, Marker};
pub use evaluator::{
    evaluate_criteria, CriteriaResult, Criterion, CRITERIA_HEADLINE, MIN_CHARACTER_CLASSES,
};
pub use rules::{
    validate_confirm_password, validate_field, validate_new_password, FieldError, FieldId,
    FieldValidation, ValidationContext,
};
pub use sections::{contains_only_allowed_characters, SPECIAL_CHARACTERS};

#[cfg(feature = "async")]
pub use controller::run_form_events;
