use std::collections::BTreeMap;

use thiserror::Error;

use crate::candidate::{Candidate, FieldId, ResumeFile};
use crate::submit::SubmissionSink;

/// A single-field update. One variant per field so the compiler enforces
/// exhaustiveness instead of a runtime key lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Name(String),
    Email(String),
    Phone(String),
    Experience(String),
    Resume(Option<ResumeFile>),
    AdditionalSkills(String),
    NoticePeriod(String),
    CurrentCompany(String),
    JobSource(String),
}

impl FieldEdit {
    /// Build the edit for a field from its textual rendering. Clearing the
    /// resume path detaches the file.
    pub fn from_text(field: FieldId, text: String) -> Self {
        match field {
            FieldId::Name => FieldEdit::Name(text),
            FieldId::Email => FieldEdit::Email(text),
            FieldId::Phone => FieldEdit::Phone(text),
            FieldId::Experience => FieldEdit::Experience(text),
            FieldId::Resume => {
                if text.is_empty() {
                    FieldEdit::Resume(None)
                } else {
                    FieldEdit::Resume(Some(ResumeFile::new(text)))
                }
            }
            FieldId::AdditionalSkills => FieldEdit::AdditionalSkills(text),
            FieldId::NoticePeriod => FieldEdit::NoticePeriod(text),
            FieldId::CurrentCompany => FieldEdit::CurrentCompany(text),
            FieldId::JobSource => FieldEdit::JobSource(text),
        }
    }

    pub fn field(&self) -> FieldId {
        match self {
            FieldEdit::Name(_) => FieldId::Name,
            FieldEdit::Email(_) => FieldId::Email,
            FieldEdit::Phone(_) => FieldId::Phone,
            FieldEdit::Experience(_) => FieldId::Experience,
            FieldEdit::Resume(_) => FieldId::Resume,
            FieldEdit::AdditionalSkills(_) => FieldId::AdditionalSkills,
            FieldEdit::NoticePeriod(_) => FieldId::NoticePeriod,
            FieldEdit::CurrentCompany(_) => FieldId::CurrentCompany,
            FieldEdit::JobSource(_) => FieldId::JobSource,
        }
    }
}

/// The one validation error kind: a required field left empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{}", .field.requirement_message())]
pub struct MissingRequiredField {
    pub field: FieldId,
}

/// The currently-invalid required fields, keyed in render order.
///
/// Replaced wholesale on every submit attempt, never merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    entries: BTreeMap<FieldId, MissingRequiredField>,
}

impl ErrorMap {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn contains(&self, field: FieldId) -> bool {
        self.entries.contains_key(&field)
    }

    /// The display message for a field, present only while it is invalid.
    pub fn message(&self, field: FieldId) -> Option<&'static str> {
        self.entries
            .get(&field)
            .map(|err| err.field.requirement_message())
    }

    /// First invalid field in render order.
    pub fn first_field(&self) -> Option<FieldId> {
        self.entries.keys().next().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MissingRequiredField> {
        self.entries.values()
    }

    fn insert(&mut self, field: FieldId) {
        self.entries.insert(field, MissingRequiredField { field });
    }
}

/// Outcome of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The candidate was handed to the sink and the form was reset.
    Submitted,
    /// Required fields are missing; the form keeps its values and the
    /// error map was recomputed.
    Rejected { missing: usize },
}

/// Presence check over the required set. Runs only at submit time.
fn validate(candidate: &Candidate) -> ErrorMap {
    let mut errors = ErrorMap::default();
    for field in FieldId::ALL {
        if field.is_required() && !candidate.is_present(field) {
            errors.insert(field);
        }
    }
    errors
}

/// Owns the candidate under edit and the error map from the last submit
/// attempt. The two are independent: edits never touch the errors, and
/// only a submit attempt recomputes them.
#[derive(Debug, Default)]
pub struct FormState {
    candidate: Candidate,
    errors: ErrorMap,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn candidate(&self) -> &Candidate {
        &self.candidate
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Merge a single field's new value into the candidate. Pure storage:
    /// no validation, no error-map side effects.
    pub fn apply(&mut self, edit: FieldEdit) {
        match edit {
            FieldEdit::Name(value) => self.candidate.name = value,
            FieldEdit::Email(value) => self.candidate.email = value,
            FieldEdit::Phone(value) => self.candidate.phone = value,
            FieldEdit::Experience(value) => self.candidate.experience = value,
            FieldEdit::Resume(value) => self.candidate.resume = value,
            FieldEdit::AdditionalSkills(value) => self.candidate.additional_skills = value,
            FieldEdit::NoticePeriod(value) => self.candidate.notice_period = value,
            FieldEdit::CurrentCompany(value) => self.candidate.current_company = value,
            FieldEdit::JobSource(value) => self.candidate.job_source = value,
        }
    }

    /// Validate and, if every required field is present, hand the
    /// completed candidate to the sink exactly once and reset the form
    /// (optional fields included) to defaults.
    pub fn submit(&mut self, sink: &mut dyn SubmissionSink) -> SubmitOutcome {
        let errors = validate(&self.candidate);
        if !errors.is_empty() {
            let missing = errors.len();
            self.errors = errors;
            return SubmitOutcome::Rejected { missing };
        }

        let candidate = std::mem::take(&mut self.candidate);
        sink.accept(candidate);
        self.errors = ErrorMap::default();
        SubmitOutcome::Submitted
    }
}
