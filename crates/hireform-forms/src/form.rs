//! The job application form and its event-driven state machine.
//!
//! [`JobApplicationForm`] owns the form state and applies one [`FormEvent`]
//! at a time. Each event runs to completion: the value is stored,
//! visibility is recomputed, and every visible field is re-validated.
//! Errors are always computed but only *surfaced* once the configured
//! [`ValidationMode`] trigger fired for the field, or once a submit attempt
//! covered the field. A conditional field revealed after a submit starts
//! quiet until it is edited, blurred, or submitted.
//!
//! ```text
//! Editing --submit, all valid--> Submitted
//! Editing --submit, any invalid--> Editing (with errors)
//! ```
//!
//! After a successful submit the form stays editable and keeps its record
//! until a later successful submit replaces it.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};

use hireform_core::logging::form_span;
use hireform_core::{FormError, FormResult, Settings, ValidationMode};

use crate::fields::{FieldName, InputKind};
use crate::registry;
use crate::state::FormState;
use crate::submission::SubmittedRecord;
use crate::validation::{self, ValidationErrors};
use crate::value::FieldValue;
use crate::visibility;

static NEXT_FORM_ID: AtomicU64 = AtomicU64::new(1);

/// One user interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// A text, number, or select input changed.
    Input {
        /// The edited field.
        field: FieldName,
        /// The new value.
        value: FieldValue,
    },
    /// A checkbox in a group was checked or unchecked.
    Toggle {
        /// The set-valued field.
        field: FieldName,
        /// The checkbox value.
        option: String,
        /// Whether the checkbox is now checked.
        checked: bool,
    },
    /// An input was emptied back to unset.
    Clear(FieldName),
    /// An input lost focus.
    Blur(FieldName),
}

impl FormEvent {
    /// Creates an `Input` event.
    pub fn input(field: FieldName, value: impl Into<FieldValue>) -> Self {
        Self::Input {
            field,
            value: value.into(),
        }
    }

    /// Creates a `Toggle` event.
    pub fn toggle(field: FieldName, option: impl Into<String>, checked: bool) -> Self {
        Self::Toggle {
            field,
            option: option.into(),
            checked,
        }
    }

    /// Returns the field this event targets.
    pub const fn field(&self) -> FieldName {
        match self {
            Self::Input { field, .. } | Self::Toggle { field, .. } => *field,
            Self::Clear(field) | Self::Blur(field) => *field,
        }
    }
}

/// The lifecycle phase of a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    /// No successful submission yet.
    #[default]
    Editing,
    /// A submission succeeded and its record is displayed.
    Submitted,
}

/// The result of one submit attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Every visible field passed; the captured record.
    Accepted(SubmittedRecord),
    /// At least one visible field failed; nothing was captured.
    Rejected(ValidationErrors),
}

impl SubmitOutcome {
    /// Returns `true` for an accepted submission.
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// A single job application form instance.
///
/// Dropping the form discards its state and any record; construct a new
/// one to start over.
#[derive(Debug)]
pub struct JobApplicationForm {
    id: u64,
    settings: Settings,
    state: FormState,
    changed: HashSet<FieldName>,
    blurred: HashSet<FieldName>,
    submitted: HashSet<FieldName>,
    submit_count: u32,
    errors: ValidationErrors,
    phase: FormPhase,
    record: Option<SubmittedRecord>,
}

impl Default for JobApplicationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl JobApplicationForm {
    /// Creates an empty form with default settings.
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Creates an empty form with the given settings.
    pub fn with_settings(settings: Settings) -> Self {
        let id = NEXT_FORM_ID.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(form = id, mode = %settings.validation_mode, "form created");
        Self {
            id,
            settings,
            state: FormState::new(),
            changed: HashSet::new(),
            blurred: HashSet::new(),
            submitted: HashSet::new(),
            submit_count: 0,
            errors: ValidationErrors::new(),
            phase: FormPhase::Editing,
            record: None,
        }
    }

    /// Applies one event.
    ///
    /// An event whose value does not fit the field is rejected and leaves
    /// the form untouched.
    pub fn handle(&mut self, event: FormEvent) -> FormResult<()> {
        let span = form_span(self.id);
        let _guard = span.enter();

        let field = event.field();
        let kind = registry::field(field).kind;
        let visible_before = visibility::visible_fields(&self.state);
        let blurred_now = matches!(event, FormEvent::Blur(_)).then_some(field);

        match event {
            FormEvent::Input { value, .. } => {
                if !kind.accepts(&value) {
                    return Err(mismatch(field, kind));
                }
                match value {
                    FieldValue::Multi(members) => {
                        self.state.set_choices(field, &members, kind.choices());
                    }
                    value => {
                        self.state.set(field, value);
                    }
                }
                self.changed.insert(field);
            }
            FormEvent::Toggle {
                option, checked, ..
            } => {
                let InputKind::CheckboxGroup { choices } = kind else {
                    return Err(mismatch(field, kind));
                };
                if !choices.contains(&option.as_str()) {
                    return Err(FormError::InvalidChoice {
                        field: field.as_str().to_string(),
                        option,
                    });
                }
                if checked {
                    self.state.insert_choice(field, &option, choices);
                } else {
                    self.state.remove_choice(field, &option);
                }
                self.changed.insert(field);
            }
            FormEvent::Clear(_) => {
                self.state.clear(field);
                self.changed.insert(field);
            }
            FormEvent::Blur(_) => {
                self.blurred.insert(field);
            }
        }

        let visible_after = visibility::visible_fields(&self.state);
        if visible_after != visible_before {
            tracing::debug!(
                position = self.state.text(FieldName::Position).unwrap_or(""),
                visible = visible_after.len(),
                "visibility changed"
            );
        }

        self.revalidate(blurred_now);
        tracing::debug!(field = %field, errors = self.errors.len(), "event applied");
        Ok(())
    }

    /// Attempts a submission.
    ///
    /// Every visible field is validated and every error is surfaced. On
    /// success the record is captured and the form enters
    /// [`FormPhase::Submitted`]. On failure nothing is captured, and a
    /// record from an earlier success stays displayed.
    pub fn submit(&mut self) -> SubmitOutcome {
        let span = form_span(self.id);
        let _guard = span.enter();

        self.submit_count += 1;
        self.submitted.extend(visibility::visible_fields(&self.state));
        let errors = validation::validate_visible(&self.state);
        self.errors = errors.clone();

        if errors.is_empty() {
            let record = SubmittedRecord::capture(&self.state);
            tracing::debug!(attempt = self.submit_count, fields = record.len(), "submission accepted");
            self.record = Some(record.clone());
            self.phase = FormPhase::Submitted;
            SubmitOutcome::Accepted(record)
        } else {
            tracing::debug!(
                attempt = self.submit_count,
                failing = ?errors.fields(),
                "submission rejected"
            );
            SubmitOutcome::Rejected(errors)
        }
    }

    /// Returns the surfaced errors.
    pub const fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Returns the surfaced error message of a field.
    pub fn error(&self, field: FieldName) -> Option<&str> {
        self.errors.message(field)
    }

    /// Validates the visible fields now, regardless of what is surfaced.
    pub fn pending_errors(&self) -> ValidationErrors {
        validation::validate_visible(&self.state)
    }

    /// Returns `true` if a submit right now would be accepted.
    pub fn is_valid(&self) -> bool {
        self.pending_errors().is_empty()
    }

    /// Returns the current value of a field.
    pub fn value(&self, field: FieldName) -> Option<&FieldValue> {
        self.state.get(field)
    }

    /// Returns the form state.
    pub const fn state(&self) -> &FormState {
        &self.state
    }

    /// Returns `true` if the field is currently rendered.
    pub fn is_visible(&self, field: FieldName) -> bool {
        visibility::is_visible(field, &self.state)
    }

    /// Returns the currently rendered fields in declaration order.
    pub fn visible_fields(&self) -> Vec<FieldName> {
        visibility::visible_fields(&self.state)
    }

    /// Returns the lifecycle phase.
    pub const fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Returns the record of the latest successful submission.
    pub const fn record(&self) -> Option<&SubmittedRecord> {
        self.record.as_ref()
    }

    /// Returns the number of submit attempts so far.
    pub const fn submit_count(&self) -> u32 {
        self.submit_count
    }

    /// Returns the settings this form was built with.
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Renders the latest record as pretty JSON, if one exists.
    pub fn summary_json(&self) -> FormResult<Option<String>> {
        self.record
            .as_ref()
            .map(|record| record.to_pretty_json(self.settings.summary_indent))
            .transpose()
    }

    /// Recomputes the surfaced errors after an event.
    ///
    /// `blurred_now` is the field whose blur triggered this pass, if any.
    fn revalidate(&mut self, blurred_now: Option<FieldName>) {
        let current = validation::validate_visible(&self.state);
        let mut surfaced = ValidationErrors::new();
        for field in visibility::visible_fields(&self.state) {
            let source = match self.surfacing(field, blurred_now) {
                Surfacing::Live => &current,
                Surfacing::Held => &self.errors,
                Surfacing::Quiet => continue,
            };
            if let Some(error) = source.get(field) {
                surfaced.insert(field, error.clone());
            }
        }
        self.errors = surfaced;
    }

    fn surfacing(&self, field: FieldName, blurred_now: Option<FieldName>) -> Surfacing {
        let touched = self.changed.contains(&field) || self.blurred.contains(&field);
        if self.submitted.contains(&field) || (self.submit_count > 0 && touched) {
            return Surfacing::Live;
        }
        let live = match self.settings.validation_mode {
            ValidationMode::OnSubmit => false,
            ValidationMode::OnChange => self.changed.contains(&field),
            ValidationMode::OnTouched => self.blurred.contains(&field),
            ValidationMode::OnBlur if blurred_now == Some(field) => true,
            ValidationMode::OnBlur if self.blurred.contains(&field) => return Surfacing::Held,
            ValidationMode::OnBlur => false,
        };
        if live {
            Surfacing::Live
        } else {
            Surfacing::Quiet
        }
    }
}

/// Where a field's surfaced error comes from in one revalidation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Surfacing {
    /// The freshly computed result.
    Live,
    /// Whatever was surfaced before this pass.
    Held,
    /// Nothing.
    Quiet,
}

fn mismatch(field: FieldName, kind: InputKind) -> FormError {
    FormError::TypeMismatch {
        field: field.as_str().to_string(),
        expected: kind.expected(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with_mode(mode: ValidationMode) -> JobApplicationForm {
        JobApplicationForm::with_settings(Settings {
            validation_mode: mode,
            ..Settings::default()
        })
    }

    #[test]
    fn test_new_form_is_editing_and_quiet() {
        let form = JobApplicationForm::new();
        assert_eq!(form.phase(), FormPhase::Editing);
        assert!(form.errors().is_empty());
        assert!(form.record().is_none());
        assert!(!form.is_valid());
        assert_eq!(form.submit_count(), 0);
    }

    #[test]
    fn test_on_submit_mode_hides_errors_until_submit() {
        let mut form = JobApplicationForm::new();
        form.handle(FormEvent::input(FieldName::Email, "nope")).unwrap();
        form.handle(FormEvent::Blur(FieldName::Email)).unwrap();
        assert!(form.error(FieldName::Email).is_none());

        assert!(!form.submit().is_accepted());
        assert_eq!(form.error(FieldName::Email), Some("Invalid email format"));

        form.handle(FormEvent::input(FieldName::Email, "ada@x.com")).unwrap();
        assert!(form.error(FieldName::Email).is_none());
    }

    #[test]
    fn test_on_change_mode_surfaces_changed_fields_only() {
        let mut form = form_with_mode(ValidationMode::OnChange);
        form.handle(FormEvent::input(FieldName::PhoneNumber, "555-1234")).unwrap();
        assert_eq!(
            form.error(FieldName::PhoneNumber),
            Some("Phone Number must be a valid number")
        );
        assert!(form.error(FieldName::FullName).is_none());
    }

    #[test]
    fn test_on_blur_mode_waits_for_blur() {
        let mut form = form_with_mode(ValidationMode::OnBlur);
        form.handle(FormEvent::input(FieldName::FullName, "")).unwrap();
        assert!(form.error(FieldName::FullName).is_none());
        form.handle(FormEvent::Blur(FieldName::FullName)).unwrap();
        assert_eq!(form.error(FieldName::FullName), Some("Full Name is required"));
    }

    #[test]
    fn test_on_blur_mode_holds_error_until_next_blur() {
        let mut form = form_with_mode(ValidationMode::OnBlur);
        form.handle(FormEvent::input(FieldName::FullName, "Ada")).unwrap();
        form.handle(FormEvent::Blur(FieldName::FullName)).unwrap();
        assert!(form.error(FieldName::FullName).is_none());

        form.handle(FormEvent::Clear(FieldName::FullName)).unwrap();
        assert!(form.error(FieldName::FullName).is_none());
        form.handle(FormEvent::Blur(FieldName::FullName)).unwrap();
        assert_eq!(form.error(FieldName::FullName), Some("Full Name is required"));

        form.handle(FormEvent::input(FieldName::FullName, "Ada")).unwrap();
        assert_eq!(form.error(FieldName::FullName), Some("Full Name is required"));
        form.handle(FormEvent::Blur(FieldName::FullName)).unwrap();
        assert!(form.error(FieldName::FullName).is_none());
    }

    #[test]
    fn test_on_blur_and_on_touched_differ_on_change_after_blur() {
        let mut on_blur = form_with_mode(ValidationMode::OnBlur);
        let mut on_touched = form_with_mode(ValidationMode::OnTouched);
        for form in [&mut on_blur, &mut on_touched] {
            form.handle(FormEvent::input(FieldName::FullName, "Ada")).unwrap();
            form.handle(FormEvent::Blur(FieldName::FullName)).unwrap();
            form.handle(FormEvent::Clear(FieldName::FullName)).unwrap();
        }
        assert!(on_blur.error(FieldName::FullName).is_none());
        assert_eq!(
            on_touched.error(FieldName::FullName),
            Some("Full Name is required")
        );
    }

    #[test]
    fn test_revealed_field_stays_quiet_after_submit() {
        let mut form = JobApplicationForm::new();
        assert!(!form.submit().is_accepted());
        form.handle(FormEvent::input(FieldName::Position, "Designer")).unwrap();
        assert!(form.error(FieldName::PortfolioUrl).is_none());
        assert!(form.pending_errors().contains(FieldName::PortfolioUrl));

        form.handle(FormEvent::input(FieldName::PortfolioUrl, "ftp://x")).unwrap();
        assert_eq!(form.error(FieldName::PortfolioUrl), Some("Invalid URL format"));
    }

    #[test]
    fn test_on_touched_tracks_changes_after_blur() {
        let mut form = form_with_mode(ValidationMode::OnTouched);
        form.handle(FormEvent::Blur(FieldName::FullName)).unwrap();
        assert_eq!(form.error(FieldName::FullName), Some("Full Name is required"));
        form.handle(FormEvent::input(FieldName::FullName, "Ada")).unwrap();
        assert!(form.error(FieldName::FullName).is_none());
    }

    #[test]
    fn test_type_mismatch_leaves_state_untouched() {
        let mut form = JobApplicationForm::new();
        let err = form
            .handle(FormEvent::input(FieldName::FullName, 42))
            .unwrap_err();
        assert!(matches!(err, FormError::TypeMismatch { .. }));
        assert!(form.value(FieldName::FullName).is_none());

        let err = form
            .handle(FormEvent::toggle(FieldName::Email, "CSS", true))
            .unwrap_err();
        assert!(matches!(err, FormError::TypeMismatch { .. }));
    }

    #[test]
    fn test_non_finite_experience_is_rejected() {
        let mut form = JobApplicationForm::new();
        form.handle(FormEvent::input(FieldName::Position, "Developer")).unwrap();
        form.handle(FormEvent::input(FieldName::RelevantExperience, 3)).unwrap();
        let err = form
            .handle(FormEvent::input(FieldName::RelevantExperience, f64::INFINITY))
            .unwrap_err();
        assert!(matches!(err, FormError::TypeMismatch { ref field, .. } if field == "relevantExperience"));
        assert_eq!(
            form.value(FieldName::RelevantExperience),
            Some(&FieldValue::from(3))
        );
    }

    #[test]
    fn test_toggle_rejects_unknown_option() {
        let mut form = JobApplicationForm::new();
        let err = form
            .handle(FormEvent::toggle(FieldName::Skills, "Rust", true))
            .unwrap_err();
        assert!(matches!(err, FormError::InvalidChoice { option, .. } if option == "Rust"));
        assert!(form.value(FieldName::Skills).is_none());
    }

    #[test]
    fn test_toggle_add_remove() {
        let mut form = JobApplicationForm::new();
        form.handle(FormEvent::toggle(FieldName::Skills, "Python", true)).unwrap();
        form.handle(FormEvent::toggle(FieldName::Skills, "JavaScript", true)).unwrap();
        form.handle(FormEvent::toggle(FieldName::Skills, "Python", false)).unwrap();
        assert_eq!(
            form.value(FieldName::Skills),
            Some(&FieldValue::from(vec!["JavaScript"]))
        );
    }

    #[test]
    fn test_multi_input_is_normalized() {
        let mut form = JobApplicationForm::new();
        form.handle(FormEvent::input(FieldName::Skills, vec!["Python", "CSS"]))
            .unwrap();
        assert_eq!(
            form.value(FieldName::Skills),
            Some(&FieldValue::from(vec!["CSS", "Python"]))
        );
    }

    #[test]
    fn test_clear_unsets_value() {
        let mut form = JobApplicationForm::new();
        form.handle(FormEvent::input(FieldName::FullName, "Ada")).unwrap();
        form.handle(FormEvent::Clear(FieldName::FullName)).unwrap();
        assert!(form.value(FieldName::FullName).is_none());
    }

    #[test]
    fn test_event_field_accessor() {
        assert_eq!(FormEvent::Blur(FieldName::Email).field(), FieldName::Email);
        assert_eq!(
            FormEvent::toggle(FieldName::Skills, "CSS", true).field(),
            FieldName::Skills
        );
    }

    #[test]
    fn test_form_ids_are_unique() {
        let a = JobApplicationForm::new();
        let b = JobApplicationForm::new();
        assert_ne!(a.id, b.id);
    }
}
