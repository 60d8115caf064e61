//! Criteria display model - which marker each criterion shows.

use secrecy::SecretString;

use crate::evaluator::{evaluate_criteria, CriteriaResult, Criterion};

/// How criteria results are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayMode {
    /// Every criterion shows the neutral marker.
    #[default]
    Reset,
    /// Field has focus: checkmark or neutral, never a failure.
    Live,
    /// Field lost focus: checkmark or failure.
    Final,
}

/// Glyph shown next to a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Neutral,
    Checkmark,
    Failure,
}

impl Marker {
    fn for_mode(mode: DisplayMode, met: bool) -> Self {
        match (mode, met) {
            (DisplayMode::Reset, _) => Marker::Neutral,
            (_, true) => Marker::Checkmark,
            (DisplayMode::Live, false) => Marker::Neutral,
            (DisplayMode::Final, false) => Marker::Failure,
        }
    }
}

/// State of the criteria panel under the new password field.
///
/// `criteria` is `None` right after a reset, so every marker is neutral
/// until the next recompute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayModel {
    mode: DisplayMode,
    criteria: Option<CriteriaResult>,
}

impl DisplayModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// The criteria last computed, if any since the last reset.
    pub fn criteria(&self) -> Option<&CriteriaResult> {
        self.criteria.as_ref()
    }

    /// Back to the initial state: all markers neutral.
    pub fn reset(&mut self) {
        self.mode = DisplayMode::Reset;
        self.criteria = None;
    }

    /// Field gained focus: markers reset to neutral, then live mode.
    pub fn focus(&mut self) {
        self.reset();
        self.mode = DisplayMode::Live;
    }

    /// Field lost focus: final mode with criteria recomputed from `text`.
    pub fn blur(&mut self, text: &SecretString) {
        self.mode = DisplayMode::Final;
        self.update(text);
    }

    /// Text typed while editing: live mode with criteria recomputed.
    pub fn edit(&mut self, text: &SecretString) {
        self.mode = DisplayMode::Live;
        self.update(text);
    }

    /// Recomputes the criteria from `text`, keeping the current mode.
    pub fn update(&mut self, text: &SecretString) {
        self.criteria = Some(evaluate_criteria(text));
    }

    /// Marker for a single criterion in the current mode.
    pub fn marker(&self, criterion: Criterion) -> Marker {
        match self.criteria {
            Some(c) => Marker::for_mode(self.mode, c.is_met(criterion)),
            None => Marker::Neutral,
        }
    }

    /// Markers for every criterion, in display order.
    pub fn markers(&self) -> Vec<(Criterion, Marker)> {
        Criterion::ALL
            .iter()
            .map(|&c| (c, self.marker(c)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_PASSWORD: &str = "12345678Aa!";
    const TOO_SHORT: &str = "123Aa!";

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_initial_state_is_reset() {
        let model = DisplayModel::new();
        assert_eq!(model.mode(), DisplayMode::Reset);
        assert!(model.markers().iter().all(|(_, m)| *m == Marker::Neutral));
    }

    #[test]
    fn test_reset_mode_ignores_results() {
        let mut model = DisplayModel::new();
        model.update(&secret(VALID_PASSWORD));
        assert_eq!(model.mode(), DisplayMode::Reset);
        assert_eq!(model.marker(Criterion::Length), Marker::Neutral);
    }

    #[test]
    fn test_live_valid_password_shows_checkmark() {
        let mut model = DisplayModel::new();
        model.focus();
        model.update(&secret(VALID_PASSWORD));
        assert_eq!(model.mode(), DisplayMode::Live);
        assert!(model.markers().iter().all(|(_, m)| *m == Marker::Checkmark));
    }

    #[test]
    fn test_live_too_short_shows_neutral_not_failure() {
        let mut model = DisplayModel::new();
        model.focus();
        model.update(&secret(TOO_SHORT));
        assert!(!model.criteria().unwrap().is_met(Criterion::Length));
        assert_eq!(model.marker(Criterion::Length), Marker::Neutral);
        assert_eq!(model.marker(Criterion::Uppercase), Marker::Checkmark);
        assert!(model.markers().iter().all(|(_, m)| *m != Marker::Failure));
    }

    #[test]
    fn test_final_valid_password_shows_checkmark() {
        let mut model = DisplayModel::new();
        model.focus();
        model.blur(&secret(VALID_PASSWORD));
        assert_eq!(model.mode(), DisplayMode::Final);
        assert_eq!(model.marker(Criterion::Length), Marker::Checkmark);
    }

    #[test]
    fn test_final_too_short_shows_failure() {
        let mut model = DisplayModel::new();
        model.focus();
        model.blur(&secret(TOO_SHORT));
        assert_eq!(model.marker(Criterion::Length), Marker::Failure);
        assert_eq!(model.marker(Criterion::Digit), Marker::Checkmark);
    }

    #[test]
    fn test_edit_after_final_goes_live() {
        let mut model = DisplayModel::new();
        model.blur(&secret(TOO_SHORT));
        assert_eq!(model.marker(Criterion::Length), Marker::Failure);

        model.edit(&secret("123Aa!x"));
        assert_eq!(model.mode(), DisplayMode::Live);
        assert_eq!(model.marker(Criterion::Length), Marker::Neutral);
    }

    #[test]
    fn test_focus_clears_previous_markers() {
        let mut model = DisplayModel::new();
        model.blur(&secret(TOO_SHORT));
        assert_eq!(model.marker(Criterion::Length), Marker::Failure);

        model.focus();
        assert_eq!(model.mode(), DisplayMode::Live);
        assert!(model.criteria().is_none());
        assert!(model.markers().iter().all(|(_, m)| *m == Marker::Neutral));
    }
}
