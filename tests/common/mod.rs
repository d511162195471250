//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use intake::app::App;
use intake::candidate::{Candidate, ResumeFile};
use intake::form::{FieldEdit, FormState};
use intake::input::handle_key;
use intake::submit::SubmissionSink;

/// Sink that records every accepted candidate.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub accepted: Vec<Candidate>,
}

impl SubmissionSink for RecordingSink {
    fn accept(&mut self, candidate: Candidate) {
        self.accepted.push(candidate);
    }
}

/// Cloneable handle to a recording sink, for wiring through `App::with_sink`
/// while keeping a view on what was accepted.
#[derive(Debug, Clone, Default)]
pub struct SharedSink(Rc<RefCell<Vec<Candidate>>>);

impl SharedSink {
    pub fn accepted(&self) -> Vec<Candidate> {
        self.0.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.0.borrow().len()
    }
}

impl SubmissionSink for SharedSink {
    fn accept(&mut self, candidate: Candidate) {
        self.0.borrow_mut().push(candidate);
    }
}

pub const ADA_RESUME: &str = "/tmp/ada-resume.pdf";

/// Edits that fill every required field with the worked-example values.
pub fn ada_edits() -> Vec<FieldEdit> {
    vec![
        FieldEdit::Name("Ada".into()),
        FieldEdit::Email("a@b.com".into()),
        FieldEdit::Phone("555".into()),
        FieldEdit::Experience("2".into()),
        FieldEdit::Resume(Some(ResumeFile::new(ADA_RESUME))),
        FieldEdit::AdditionalSkills("Go".into()),
        FieldEdit::NoticePeriod("2 weeks".into()),
    ]
}

/// A form with every required field filled and both optional fields empty.
pub fn filled_form() -> FormState {
    let mut form = FormState::new();
    for edit in ada_edits() {
        form.apply(edit);
    }
    form
}

/// The candidate `filled_form` should hand to the sink on submit.
pub fn ada_candidate() -> Candidate {
    Candidate {
        name: "Ada".into(),
        email: "a@b.com".into(),
        phone: "555".into(),
        experience: "2".into(),
        resume: Some(ResumeFile::new(ADA_RESUME)),
        additional_skills: "Go".into(),
        notice_period: "2 weeks".into(),
        current_company: String::new(),
        job_source: String::new(),
    }
}

/// Press a single key with no modifiers.
pub fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

/// Press a single key with the given modifiers.
pub fn press_with(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    handle_key(app, KeyEvent::new(code, modifiers));
}

/// Type a string into the focused field. The app must be in insert mode.
pub fn type_str(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}
