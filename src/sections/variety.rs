//! Character variety sections - uppercase, lowercase, digits, special chars.

use secrecy::{ExposeSecret, SecretString};

use super::charset::is_special_character;
use super::SectionResult;

/// Met if the password contains at least one ASCII uppercase letter.
pub fn uppercase_section(password: &SecretString) -> SectionResult {
    password.expose_secret().chars().any(|c| c.is_ascii_uppercase())
}

/// Met if the password contains at least one ASCII lowercase letter.
pub fn lowercase_section(password: &SecretString) -> SectionResult {
    password.expose_secret().chars().any(|c| c.is_ascii_lowercase())
}

/// Met if the password contains at least one ASCII digit.
pub fn digit_section(password: &SecretString) -> SectionResult {
    password.expose_secret().chars().any(|c| c.is_ascii_digit())
}

/// Met if the password contains at least one character from
/// [`SPECIAL_CHARACTERS`](super::SPECIAL_CHARACTERS).
pub fn special_character_section(password: &SecretString) -> SectionResult {
    password.expose_secret().chars().any(is_special_character)
}
