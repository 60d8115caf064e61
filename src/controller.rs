//! Validation controller - drives both fields, the criteria panel and submit.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::config::FormConfig;
use crate::display::{DisplayMode, DisplayModel, Marker};
use crate::evaluator::Criterion;
use crate::rules::{validate_field, FieldId, FieldValidation, ValidationContext};

/// Result of a submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

/// Per-field results of a submit plus the overall outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReport {
    pub new_password: FieldValidation,
    pub confirm_password: FieldValidation,
    pub outcome: Outcome,
}

/// Validates both fields independently and combines them.
///
/// Both rules always run; the outcome is `Success` only if both are valid.
pub fn submit_form(
    new_password: Option<&SecretString>,
    confirm_password: Option<&SecretString>,
) -> SubmitReport {
    let context = ValidationContext { new_password };
    let new_password = validate_field(FieldId::NewPassword, new_password, &context);
    let confirm_password = validate_field(FieldId::ConfirmPassword, confirm_password, &context);
    let outcome = if new_password.valid && confirm_password.valid {
        Outcome::Success
    } else {
        Outcome::Failure
    };
    SubmitReport {
        new_password,
        confirm_password,
        outcome,
    }
}

/// Notification the UI presents after a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessNotice {
    pub title: String,
    pub message: String,
}

fn empty_secret() -> SecretString {
    SecretString::new(String::new().into())
}

/// Text and validation state of a single field.
#[derive(Debug)]
pub struct FieldState {
    text: SecretString,
    validation: Option<FieldValidation>,
    secure_entry: bool,
}

impl Default for FieldState {
    fn default() -> Self {
        Self {
            text: empty_secret(),
            validation: None,
            secure_entry: true,
        }
    }
}

impl FieldState {
    pub fn text(&self) -> &SecretString {
        &self.text
    }

    /// Last validation result, `None` until the field is first validated.
    pub fn validation(&self) -> Option<&FieldValidation> {
        self.validation.as_ref()
    }

    /// Error shown under the field; `None` means the error label is hidden.
    pub fn error_message(&self) -> Option<&str> {
        self.validation
            .as_ref()
            .filter(|v| !v.valid)
            .map(|v| v.message.as_str())
    }

    /// Whether the text is masked.
    pub fn secure_entry(&self) -> bool {
        self.secure_entry
    }
}

/// Both fields of the form for one screen visit.
#[derive(Debug, Default)]
pub struct FormState {
    pub new_password: FieldState,
    pub confirm_password: FieldState,
}

impl FormState {
    pub fn field(&self, field: FieldId) -> &FieldState {
        match field {
            FieldId::NewPassword => &self.new_password,
            FieldId::ConfirmPassword => &self.confirm_password,
        }
    }

    fn field_mut(&mut self, field: FieldId) -> &mut FieldState {
        match field {
            FieldId::NewPassword => &mut self.new_password,
            FieldId::ConfirmPassword => &mut self.confirm_password,
        }
    }
}

/// Input coming from the UI layer.
#[derive(Debug)]
pub enum FormEvent {
    Focus(FieldId),
    Blur(FieldId),
    TextChanged(FieldId, SecretString),
    ToggleSecureEntry(FieldId),
    Submit,
    Reset,
}

/// Render state of one field. Never carries the field text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSnapshot {
    pub placeholder: String,
    pub error: Option<String>,
    pub secure_entry: bool,
}

/// Everything the UI needs to redraw the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    pub mode: DisplayMode,
    pub markers: Vec<(Criterion, Marker)>,
    pub new_password: FieldSnapshot,
    pub confirm_password: FieldSnapshot,
    pub notice: Option<SuccessNotice>,
}

/// Orchestrates the new / confirm password fields and the criteria panel.
#[derive(Debug, Default)]
pub struct ValidationController {
    config: FormConfig,
    state: FormState,
    display: DisplayModel,
    focused: Option<FieldId>,
    notice: Option<SuccessNotice>,
}

impl ValidationController {
    pub fn new(config: FormConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn field(&self, field: FieldId) -> &FieldState {
        self.state.field(field)
    }

    pub fn display(&self) -> &DisplayModel {
        &self.display
    }

    pub fn focused(&self) -> Option<FieldId> {
        self.focused
    }

    /// Notice waiting to be presented, if the last submit succeeded.
    pub fn notice(&self) -> Option<&SuccessNotice> {
        self.notice.as_ref()
    }

    /// Takes the pending notice once the UI has presented it.
    pub fn take_notice(&mut self) -> Option<SuccessNotice> {
        self.notice.take()
    }

    /// Screen entry: empty fields, no errors, criteria panel reset.
    pub fn reset(&mut self) {
        self.state = FormState::default();
        self.display.reset();
        self.focused = None;
        self.notice = None;
    }

    pub fn focus(&mut self, field: FieldId) {
        #[cfg(feature = "tracing")]
        tracing::debug!("Focus gained: {:?}", field);

        self.focused = Some(field);
        if field == FieldId::NewPassword {
            self.display.focus();
        }
    }

    /// Text typed into `field`. Typing means the field is being edited, so
    /// the criteria panel goes back to live mode.
    pub fn text_changed(&mut self, field: FieldId, text: SecretString) {
        self.state.field_mut(field).text = text;
        self.focused = Some(field);
        if field == FieldId::NewPassword {
            self.display.edit(&self.state.new_password.text);
        }
    }

    /// Field lost focus: criteria panel goes final and the field's rule runs.
    pub fn blur(&mut self, field: FieldId) {
        #[cfg(feature = "tracing")]
        tracing::debug!("Focus lost: {:?}", field);

        if self.focused == Some(field) {
            self.focused = None;
        }
        if field == FieldId::NewPassword {
            self.display.blur(&self.state.new_password.text);
        }
        let validation = self.validate(field);
        self.state.field_mut(field).validation = Some(validation);
    }

    pub fn toggle_secure_entry(&mut self, field: FieldId) {
        let state = self.state.field_mut(field);
        state.secure_entry = !state.secure_entry;
    }

    /// Runs `field`'s rule against the current form text.
    pub fn validate(&self, field: FieldId) -> FieldValidation {
        let context = ValidationContext {
            new_password: Some(&self.state.new_password.text),
        };
        validate_field(field, Some(&self.state.field(field).text), &context)
    }

    /// Validates both fields and records the per-field results.
    ///
    /// On success a [`SuccessNotice`] is left for the UI; on failure any
    /// previous notice is dropped.
    ///
    /// Submitting ends editing: the focused field loses focus and the
    /// criteria panel goes final.
    pub fn submit(&mut self) -> Outcome {
        self.focused = None;
        self.display.blur(&self.state.new_password.text);

        let report = submit_form(
            Some(&self.state.new_password.text),
            Some(&self.state.confirm_password.text),
        );
        self.state.new_password.validation = Some(report.new_password);
        self.state.confirm_password.validation = Some(report.confirm_password);

        self.notice = match report.outcome {
            Outcome::Success => Some(SuccessNotice {
                title: self.config.success_title.clone(),
                message: self.config.success_message.clone(),
            }),
            Outcome::Failure => None,
        };

        #[cfg(feature = "tracing")]
        tracing::info!("Password form submitted: {:?}", report.outcome);

        report.outcome
    }

    /// Applies one UI event and returns the state to render.
    ///
    /// A pending [`SuccessNotice`] is handed out in the returned snapshot
    /// once and then cleared.
    pub fn handle_event(&mut self, event: FormEvent) -> FormSnapshot {
        match event {
            FormEvent::Focus(field) => self.focus(field),
            FormEvent::Blur(field) => self.blur(field),
            FormEvent::TextChanged(field, text) => self.text_changed(field, text),
            FormEvent::ToggleSecureEntry(field) => self.toggle_secure_entry(field),
            FormEvent::Submit => {
                self.submit();
            }
            FormEvent::Reset => self.reset(),
        }
        let mut snapshot = self.snapshot();
        snapshot.notice = self.take_notice();
        snapshot
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            mode: self.display.mode(),
            markers: self.display.markers(),
            new_password: self.field_snapshot(FieldId::NewPassword),
            confirm_password: self.field_snapshot(FieldId::ConfirmPassword),
            notice: self.notice.clone(),
        }
    }

    fn field_snapshot(&self, field: FieldId) -> FieldSnapshot {
        let placeholder = match field {
            FieldId::NewPassword => &self.config.new_password_placeholder,
            FieldId::ConfirmPassword => &self.config.confirm_password_placeholder,
        };
        let state = self.state.field(field);
        FieldSnapshot {
            placeholder: placeholder.clone(),
            error: state.error_message().map(str::to_string),
            secure_entry: state.secure_entry,
        }
    }
}

/// Feeds UI events into `controller` one at a time, sending a snapshot
/// after each.
///
/// Stops when the event channel closes, the snapshot receiver is dropped or
/// `token` is cancelled. Returns the controller with its final state.
#[cfg(feature = "async")]
pub async fn run_form_events(
    mut controller: ValidationController,
    mut rx: mpsc::Receiver<FormEvent>,
    tx: mpsc::Sender<FormSnapshot>,
    token: CancellationToken,
) -> ValidationController {
    #[cfg(feature = "tracing")]
    tracing::info!("form event loop started");

    loop {
        let event = tokio::select! {
            biased;
            _ = token.cancelled() => break,
            event = rx.recv() => match event {
                Some(event) => event,
                None => break,
            },
        };

        let snapshot = controller.handle_event(event);
        if let Err(_e) = tx.send(snapshot).await {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to send form snapshot: {}", _e);
            break;
        }
    }

    #[cfg(feature = "tracing")]
    tracing::info!("form event loop stopped");

    controller
}
