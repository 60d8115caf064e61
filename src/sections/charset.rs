//! Character-set gate - whitelist of characters a password may contain.

use secrecy::{ExposeSecret, SecretString};

/// Special characters accepted in a password.
pub const SPECIAL_CHARACTERS: &str = ".,@:?!()$^%&\\/#";

/// Returns `true` if `c` is one of [`SPECIAL_CHARACTERS`].
pub fn is_special_character(c: char) -> bool {
    SPECIAL_CHARACTERS.contains(c)
}

/// Checks that every character is an ASCII letter, an ASCII digit or a
/// special character.
///
/// Spaces, other symbols and non-ASCII characters are rejected. An empty
/// string passes; emptiness is reported separately by the field rules.
pub fn contains_only_allowed_characters(password: &SecretString) -> bool {
    password
        .expose_secret()
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || is_special_character(c))
}
