use chrono::{Local, Utc};
use tracing::warn;

use crate::storage::SubmissionStore;

use super::draft::Draft;
use super::field::Field;
use super::submission::Submission;
use super::validation::{ErrorMap, validate};

/// Result of a submit attempt.
///
/// Rejection is expected, recoverable input, not an error; nothing here is
/// ever an `Err`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The draft passed validation and was stamped and appended.
    Accepted,
    /// Validation failed; the error map holds the per-field messages.
    Rejected,
}

/// Owns the draft record, the current error map, and the advanced-fields
/// visibility flag.
///
/// This is the complete mutation surface the presentation layer drives;
/// screens never touch the draft directly.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    draft: Draft,
    errors: ErrorMap,
    show_advanced: bool,
}

impl FormState {
    /// Creates an all-empty form with advanced fields hidden.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current draft, read-only.
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// The current error map, read-only.
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// The current error message for one field, if any.
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Whether the optional fields (age, country, interests) are shown.
    pub fn show_advanced(&self) -> bool {
        self.show_advanced
    }

    /// Replaces one scalar field and clears its error entry.
    ///
    /// Clear-on-edit is optimistic: no re-validation happens until the next
    /// submit.
    pub fn update_field(&mut self, field: Field, value: &str) {
        self.draft.set(field, value);
        self.errors.remove(&field);
    }

    /// Toggles interest membership with an explicit include/exclude signal.
    pub fn toggle_interest(&mut self, interest: &str, include: bool) {
        self.draft.toggle_interest(interest, include);
        self.errors.remove(&Field::Interests);
    }

    /// Flips advanced-field visibility. No validation side effect.
    pub fn toggle_advanced(&mut self) {
        self.show_advanced = !self.show_advanced;
    }

    /// Restores the draft to its all-empty initial value.
    pub fn reset_draft(&mut self) {
        self.draft = Draft::default();
    }

    /// Validates the draft and, when clean, stamps and appends a submission.
    ///
    /// On rejection the error map is replaced wholesale and the draft is
    /// left untouched. On acceptance the draft resets and errors clear. A
    /// persistence write failure does not fail the submit: the record is
    /// already in the in-memory store, which stays authoritative, and the
    /// failure is logged as a warning.
    pub fn submit(&mut self, store: &mut SubmissionStore) -> SubmitOutcome {
        let errors = validate(&self.draft, self.show_advanced);
        if !errors.is_empty() {
            self.errors = errors;
            return SubmitOutcome::Rejected;
        }

        let submission = Submission::stamp(&self.draft, next_id(store), Local::now());
        if let Err(e) = store.append(submission) {
            warn!(error = %e, "could not persist submission; keeping in-memory copy");
        }
        self.reset_draft();
        self.errors.clear();
        SubmitOutcome::Accepted
    }
}

/// Derives a creation-time id, bumped past any existing id so the store's
/// uniqueness invariant holds even for submissions within the same
/// millisecond.
fn next_id(store: &SubmissionStore) -> i64 {
    let now = Utc::now().timestamp_millis();
    match store.list().iter().map(|s| s.id).max() {
        Some(max) if max >= now => max + 1,
        _ => now,
    }
}
