//! Waitlist capture form model.
//!
//! LIFECYCLE
//! =========
//! `Editing` → `Submitting` → `Succeeded` | `Failed`. `Failed` is editable and
//! keeps the draft so the user can retry. `Succeeded` holds until the page
//! resets the form after the confirmation delay.
//!
//! The model is plain data so the transitions are testable without a
//! browser; the component stores it in an `RwSignal`.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::cell::RefCell;
use std::time::Duration;

use leptos::prelude::{RwSignal, Update};

use super::lead::{LeadDraft, LeadField};
use crate::net::types::{LeadSubmission, SubmissionError};

/// Shown for every failed insert, whatever the cause.
pub const SUBMISSION_ERROR_MESSAGE: &str = "Hubo un error al guardar tus datos. Por favor intenta de nuevo.";

/// How long the confirmation stays up before the form closes and resets.
pub const SUCCESS_DISPLAY_DELAY: Duration = Duration::from_secs(3);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitting,
    Succeeded,
    Failed,
}

impl FormPhase {
    /// Fields may be edited and a submission started.
    #[must_use]
    pub fn is_editable(self) -> bool {
        matches!(self, Self::Editing | Self::Failed)
    }
}

/// Why `begin_submit` refused to start an insert.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("submission already succeeded")]
    AlreadySucceeded,
    #[error("required field {} is empty", .0.name())]
    MissingField(LeadField),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WaitlistForm {
    draft: LeadDraft,
    phase: FormPhase,
}

impl WaitlistForm {
    #[must_use]
    pub fn draft(&self) -> &LeadDraft {
        &self.draft
    }

    #[must_use]
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// The user-facing error line, present only after a failed insert.
    #[must_use]
    pub fn error_message(&self) -> Option<&'static str> {
        (self.phase == FormPhase::Failed).then_some(SUBMISSION_ERROR_MESSAGE)
    }

    /// Write one field. Ignored (returns `false`) unless the form is editable.
    pub fn update_field(&mut self, field: LeadField, value: impl Into<String>) -> bool {
        if !self.phase.is_editable() {
            return false;
        }
        self.draft.set(field, value.into());
        true
    }

    /// Write a field addressed by its form name. Unknown names are ignored.
    pub fn update_named(&mut self, name: &str, value: impl Into<String>) -> bool {
        match LeadField::from_name(name) {
            Some(field) => self.update_field(field, value),
            None => false,
        }
    }

    /// Move to `Submitting` and hand back the record to insert.
    ///
    /// # Errors
    ///
    /// Refuses while an insert is in flight, after success, or while any
    /// required field is empty. A refusal leaves the form untouched.
    pub fn begin_submit(&mut self, plan_interest: &str) -> Result<LeadSubmission, SubmitRejected> {
        match self.phase {
            FormPhase::Submitting => return Err(SubmitRejected::InFlight),
            FormPhase::Succeeded => return Err(SubmitRejected::AlreadySucceeded),
            FormPhase::Editing | FormPhase::Failed => {}
        }
        if let Some(field) = self.draft.first_missing() {
            return Err(SubmitRejected::MissingField(field));
        }
        self.phase = FormPhase::Submitting;
        Ok(LeadSubmission::from_draft(&self.draft, plan_interest))
    }

    /// Apply the store's answer to an in-flight submission.
    ///
    /// Outcomes that arrive when nothing is in flight are dropped.
    pub fn complete_submit(&mut self, outcome: &Result<(), SubmissionError>) -> FormPhase {
        if self.phase == FormPhase::Submitting {
            self.phase = if outcome.is_ok() { FormPhase::Succeeded } else { FormPhase::Failed };
        }
        self.phase
    }

    /// Back to an empty `Editing` form.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The user closed the modal. Discards the draft unless an insert is in
    /// flight or has just succeeded; those finish on their own.
    pub fn dismiss(&mut self) {
        if self.phase.is_editable() {
            self.reset();
        }
    }
}

/// Access to a `WaitlistForm` that outlives an await point.
///
/// Returns `None` once the owner has been disposed, so late results never
/// write into torn-down state.
pub trait FormHandle {
    fn update_form<R>(&self, f: impl FnOnce(&mut WaitlistForm) -> R) -> Option<R>;
}

impl FormHandle for RwSignal<WaitlistForm> {
    fn update_form<R>(&self, f: impl FnOnce(&mut WaitlistForm) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl FormHandle for RefCell<WaitlistForm> {
    fn update_form<R>(&self, f: impl FnOnce(&mut WaitlistForm) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}
