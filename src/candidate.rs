use std::path::Path;

use serde::{Deserialize, Serialize};

/// In-memory handle for the resume the user attached.
///
/// Holds the path as entered plus the derived display name. The file is
/// never opened: no content inspection, no size or type restriction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeFile {
    path: String,
    file_name: String,
}

impl ResumeFile {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let file_name = Path::new(&path)
            .file_name()
            .map_or_else(|| path.clone(), |name| name.to_string_lossy().into_owned());
        Self { path, file_name }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

/// The record of values collected from the form for one prospective
/// applicant. All text fields start empty, the resume starts unattached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub experience: String,
    pub resume: Option<ResumeFile>,
    pub additional_skills: String,
    pub notice_period: String,
    pub current_company: String,
    pub job_source: String,
}

impl Candidate {
    /// Textual rendering of a field as shown in its input row.
    ///
    /// The resume renders as its path, empty when unattached.
    pub fn text(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Phone => &self.phone,
            FieldId::Experience => &self.experience,
            FieldId::Resume => self.resume.as_ref().map_or("", ResumeFile::path),
            FieldId::AdditionalSkills => &self.additional_skills,
            FieldId::NoticePeriod => &self.notice_period,
            FieldId::CurrentCompany => &self.current_company,
            FieldId::JobSource => &self.job_source,
        }
    }

    /// Whether the field holds a value. For the resume this means a file
    /// is attached; for text fields, a non-empty string.
    pub fn is_present(&self, field: FieldId) -> bool {
        match field {
            FieldId::Resume => self.resume.is_some(),
            _ => !self.text(field).is_empty(),
        }
    }
}

/// One variant per form field, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    Name,
    Email,
    Phone,
    Experience,
    Resume,
    AdditionalSkills,
    NoticePeriod,
    CurrentCompany,
    JobSource,
}

impl FieldId {
    /// All fields in render order.
    pub const ALL: [FieldId; 9] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Experience,
        FieldId::Resume,
        FieldId::AdditionalSkills,
        FieldId::NoticePeriod,
        FieldId::CurrentCompany,
        FieldId::JobSource,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            FieldId::Name => "Name",
            FieldId::Email => "Email",
            FieldId::Phone => "Phone",
            FieldId::Experience => "Experience",
            FieldId::Resume => "Resume",
            FieldId::AdditionalSkills => "Additional Skills",
            FieldId::NoticePeriod => "Notice Period",
            FieldId::CurrentCompany => "Current Company",
            FieldId::JobSource => "Where did you hear about this job?",
        }
    }

    pub const fn placeholder(self) -> &'static str {
        match self {
            FieldId::Name => "Enter your name here",
            FieldId::Email => "Your email",
            FieldId::Phone => "Your phone number",
            FieldId::Experience => "Years of experience",
            FieldId::Resume => "Path to your updated resume",
            FieldId::AdditionalSkills => "List your additional skills",
            FieldId::NoticePeriod => "Notice period duration",
            FieldId::CurrentCompany => "Your current company",
            FieldId::JobSource => "Job source",
        }
    }

    pub const fn is_required(self) -> bool {
        !matches!(self, FieldId::CurrentCompany | FieldId::JobSource)
    }

    /// The fixed message shown when a required field is left empty.
    pub const fn requirement_message(self) -> &'static str {
        match self {
            FieldId::Name => "Name is required",
            FieldId::Email => "Email is required",
            FieldId::Phone => "Phone is required",
            FieldId::Experience => "Experience is required",
            FieldId::Resume => "Resume is required",
            FieldId::AdditionalSkills => "Skills are required",
            FieldId::NoticePeriod => "Notice period is required",
            FieldId::CurrentCompany => "Current company is required",
            FieldId::JobSource => "Job source is required",
        }
    }

    /// Next field in render order, wrapping at the end.
    pub fn next(self) -> FieldId {
        let index = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Previous field in render order, wrapping at the start.
    pub fn prev(self) -> FieldId {
        let index = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn is_last(self) -> bool {
        Self::ALL.last() == Some(&self)
    }
}
