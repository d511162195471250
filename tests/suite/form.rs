//! Reducer, validator, and submission tests

use intake::candidate::{Candidate, FieldId, ResumeFile};
use intake::form::{FieldEdit, FormState, MissingRequiredField, SubmitOutcome};

use crate::common::{RecordingSink, ada_candidate, filled_form};

#[test]
fn each_required_field_blocks_submission_alone() {
    let required: Vec<FieldId> = FieldId::ALL
        .into_iter()
        .filter(|f| f.is_required())
        .collect();

    for field in required {
        let mut form = filled_form();
        form.apply(FieldEdit::from_text(field, String::new()));

        let mut sink = RecordingSink::default();
        let outcome = form.submit(&mut sink);

        assert_eq!(outcome, SubmitOutcome::Rejected { missing: 1 });
        assert_eq!(form.errors().len(), 1, "only {field:?} should be invalid");
        assert!(form.errors().contains(field));
        assert_eq!(
            form.errors().message(field),
            Some(field.requirement_message())
        );
        assert!(sink.accepted.is_empty(), "sink must not fire for {field:?}");
    }
}

#[test]
fn optional_fields_are_never_validated() {
    // Optional fields empty, everything required filled
    let mut form = filled_form();
    let mut sink = RecordingSink::default();

    assert_eq!(form.submit(&mut sink), SubmitOutcome::Submitted);
    assert_eq!(sink.accepted.len(), 1);
}

#[test]
fn successful_submit_hands_exact_candidate_to_sink_and_resets() {
    let mut form = filled_form();
    let mut sink = RecordingSink::default();

    let outcome = form.submit(&mut sink);

    assert_eq!(outcome, SubmitOutcome::Submitted);
    assert_eq!(sink.accepted, vec![ada_candidate()]);

    // Every field, optional ones included, is back to its default
    assert_eq!(form.candidate(), &Candidate::default());
    assert!(form.errors().is_empty());
}

#[test]
fn optional_values_pass_through_and_reset_too() {
    let mut form = filled_form();
    form.apply(FieldEdit::CurrentCompany("Initech".into()));
    form.apply(FieldEdit::JobSource("referral".into()));

    let mut sink = RecordingSink::default();
    assert_eq!(form.submit(&mut sink), SubmitOutcome::Submitted);

    let accepted = &sink.accepted[0];
    assert_eq!(accepted.current_company, "Initech");
    assert_eq!(accepted.job_source, "referral");
    assert_eq!(form.candidate(), &Candidate::default());
}

#[test]
fn errors_are_replaced_not_merged_per_attempt() {
    let mut form = FormState::new();
    let mut sink = RecordingSink::default();

    // Everything required is missing
    assert_eq!(form.submit(&mut sink), SubmitOutcome::Rejected { missing: 7 });
    assert_eq!(form.errors().len(), 7);

    // Fill one field; its stale error survives until the next attempt
    form.apply(FieldEdit::Name("Ada".into()));
    assert!(form.errors().contains(FieldId::Name));
    assert_eq!(form.errors().len(), 7);

    // The next attempt recomputes the map from scratch
    assert_eq!(form.submit(&mut sink), SubmitOutcome::Rejected { missing: 6 });
    assert!(!form.errors().contains(FieldId::Name));
    assert_eq!(form.errors().len(), 6);
    assert!(sink.accepted.is_empty());
}

#[test]
fn editing_after_rejection_touches_only_that_field() {
    let mut form = filled_form();
    form.apply(FieldEdit::Email(String::new()));
    form.apply(FieldEdit::Phone(String::new()));

    let mut sink = RecordingSink::default();
    assert_eq!(form.submit(&mut sink), SubmitOutcome::Rejected { missing: 2 });
    assert_eq!(form.errors().first_field(), Some(FieldId::Email));

    form.apply(FieldEdit::Email("a@b.com".into()));

    assert_eq!(form.candidate().email, "a@b.com");
    assert_eq!(form.candidate().phone, "");
    assert_eq!(form.candidate().name, "Ada");
    // Both error entries remain until the next submit
    assert!(form.errors().contains(FieldId::Email));
    assert!(form.errors().contains(FieldId::Phone));
}

#[test]
fn clearing_resume_detaches_the_file() {
    let mut form = filled_form();
    assert!(form.candidate().resume.is_some());

    // The cleared file input maps to an empty path
    form.apply(FieldEdit::from_text(FieldId::Resume, String::new()));
    assert!(form.candidate().resume.is_none());

    let mut sink = RecordingSink::default();
    let outcome = form.submit(&mut sink);

    assert_eq!(outcome, SubmitOutcome::Rejected { missing: 1 });
    assert!(form.errors().contains(FieldId::Resume));
    assert!(sink.accepted.is_empty());
}

#[test]
fn apply_is_idempotent() {
    let mut form = FormState::new();
    let mut sink = RecordingSink::default();
    form.submit(&mut sink);
    let errors_after_submit = form.errors().clone();

    form.apply(FieldEdit::Name("Ada".into()));
    let once = form.candidate().clone();

    form.apply(FieldEdit::Name("Ada".into()));
    assert_eq!(form.candidate(), &once);
    // No spurious re-validation or error clearing either
    assert_eq!(form.errors(), &errors_after_submit);
}

#[test]
fn whitespace_counts_as_present() {
    // Presence only: no trimming, no format checks
    let mut form = filled_form();
    form.apply(FieldEdit::Email(" ".into()));
    form.apply(FieldEdit::Phone("not-a-number".into()));

    let mut sink = RecordingSink::default();
    assert_eq!(form.submit(&mut sink), SubmitOutcome::Submitted);
}

#[test]
fn missing_required_field_displays_its_message() {
    let err = MissingRequiredField {
        field: FieldId::AdditionalSkills,
    };
    assert_eq!(err.to_string(), "Skills are required");

    let err = MissingRequiredField {
        field: FieldId::NoticePeriod,
    };
    assert_eq!(err.to_string(), "Notice period is required");
}

#[test]
fn from_text_builds_the_matching_edit() {
    for field in FieldId::ALL {
        let edit = FieldEdit::from_text(field, "value".into());
        assert_eq!(edit.field(), field);
    }

    // Resume maps text to an attached file, empty text to none
    let edit = FieldEdit::from_text(FieldId::Resume, "/tmp/cv.pdf".into());
    assert_eq!(edit, FieldEdit::Resume(Some(ResumeFile::new("/tmp/cv.pdf"))));
    let edit = FieldEdit::from_text(FieldId::Resume, String::new());
    assert_eq!(edit, FieldEdit::Resume(None));
}
