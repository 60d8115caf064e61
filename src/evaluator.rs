//! Criteria evaluator - main evaluation logic.

use secrecy::SecretString;

use crate::sections::{
    digit_section, length_section, lowercase_section, special_character_section,
    uppercase_section,
};

/// Minimum number of character classes a password must cover.
pub const MIN_CHARACTER_CLASSES: usize = 3;

/// Headline shown above the character class criteria.
pub const CRITERIA_HEADLINE: &str =
    "Use at least 3 of these 4 criteria when setting your password:";

/// A single password criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Criterion {
    Length,
    Uppercase,
    Lowercase,
    Digit,
    SpecialCharacter,
}

impl Criterion {
    /// All criteria, in display order.
    pub const ALL: [Criterion; 5] = [
        Criterion::Length,
        Criterion::Uppercase,
        Criterion::Lowercase,
        Criterion::Digit,
        Criterion::SpecialCharacter,
    ];

    /// The four character class criteria counted towards the 3-of-4 rule.
    pub const CHARACTER_CLASSES: [Criterion; 4] = [
        Criterion::Uppercase,
        Criterion::Lowercase,
        Criterion::Digit,
        Criterion::SpecialCharacter,
    ];

    /// Label shown next to the criterion marker.
    pub fn label(self) -> &'static str {
        match self {
            Criterion::Length => "8-32 characters (no spaces)",
            Criterion::Uppercase => "uppercase letter (A-Z)",
            Criterion::Lowercase => "lowercase (a-z)",
            Criterion::Digit => "digit (0-9)",
            Criterion::SpecialCharacter => "special character (e.g. !@#$%^)",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Met / not met status of every [`Criterion`] for one candidate text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CriteriaResult {
    met: [bool; 5],
}

impl CriteriaResult {
    /// Evaluates every criterion against `password`.
    pub fn evaluate(password: &SecretString) -> Self {
        // Orchestrator: run every section, no short-circuit
        let sections: [(Criterion, fn(&SecretString) -> bool); 5] = [
            (Criterion::Length, length_section),
            (Criterion::Uppercase, uppercase_section),
            (Criterion::Lowercase, lowercase_section),
            (Criterion::Digit, digit_section),
            (Criterion::SpecialCharacter, special_character_section),
        ];

        let mut result = CriteriaResult::default();
        for (criterion, section_fn) in sections {
            result.met[criterion.index()] = section_fn(password);
        }
        result
    }

    pub fn is_met(&self, criterion: Criterion) -> bool {
        self.met[criterion.index()]
    }

    /// Number of character class criteria met (0..=4).
    pub fn character_classes_met(&self) -> usize {
        Criterion::CHARACTER_CLASSES
            .iter()
            .filter(|&&c| self.is_met(c))
            .count()
    }

    /// Overall pass: length is met and at least 3 of the 4 character classes are.
    pub fn passes(&self) -> bool {
        self.is_met(Criterion::Length) && self.character_classes_met() >= MIN_CHARACTER_CLASSES
    }

    /// Iterates `(criterion, met)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Criterion, bool)> + '_ {
        Criterion::ALL.into_iter().map(move |c| (c, self.is_met(c)))
    }
}

/// Evaluates the password criteria.
///
/// Pure: the result depends only on `password` and is recomputed from
/// scratch on every call.
pub fn evaluate_criteria(password: &SecretString) -> CriteriaResult {
    CriteriaResult::evaluate(password)
}
