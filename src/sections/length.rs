//! Length section - checks password length bounds and whitespace.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 32;

/// Checks if the password is between `MIN_LENGTH` and `MAX_LENGTH`
/// characters long and contains no whitespace.
///
/// Length is counted in characters, not bytes.
pub fn length_section(password: &SecretString) -> SectionResult {
    let pwd = password.expose_secret();
    let len = pwd.chars().count();
    (MIN_LENGTH..=MAX_LENGTH).contains(&len) && !pwd.chars().any(char::is_whitespace)
}
