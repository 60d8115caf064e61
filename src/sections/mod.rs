//! Password criteria sections
//!
//! Each section checks a single aspect of the candidate password.

mod charset;
mod length;
mod variety;

pub use charset::{contains_only_allowed_characters, SPECIAL_CHARACTERS};
pub use length::length_section;
pub use variety::{digit_section, lowercase_section, special_character_section, uppercase_section};

/// Result type for section check functions.
/// - `true` - Criterion met
/// - `false` - Criterion not met
pub type SectionResult = bool;
