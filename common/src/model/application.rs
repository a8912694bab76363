//! The recruitment application in its three shapes.
//!
//! - [`ApplicationDraft`] is what the applicant edits and what the recruit page
//!   posts to `POST /api/recruit` (camelCase on the wire).
//! - [`NewApplication`] is the validated draft reduced to its storage shape:
//!   snake_case fields, only the selected interview slots, empty optional texts
//!   dropped, and the submission instant attached.
//! - [`StoredApplication`] is a persisted row as returned to the admin view,
//!   with the storage-assigned id and bookkeeping timestamps.

use super::interview::{InterviewSelection, InterviewSlot};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Every field of the draft, named as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    StudentId,
    Contact,
    Motivation,
    Activities,
    InterviewTimes,
    AdditionalComments,
    InterviewNotes,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::StudentId => "studentId",
            Field::Contact => "contact",
            Field::Motivation => "motivation",
            Field::Activities => "activities",
            Field::InterviewTimes => "interviewTimes",
            Field::AdditionalComments => "additionalComments",
            Field::InterviewNotes => "interviewNotes",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown application field '{0}'")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Field::Name),
            "studentId" => Ok(Field::StudentId),
            "contact" => Ok(Field::Contact),
            "motivation" => Ok(Field::Motivation),
            "activities" => Ok(Field::Activities),
            "interviewTimes" => Ok(Field::InterviewTimes),
            "additionalComments" => Ok(Field::AdditionalComments),
            "interviewNotes" => Ok(Field::InterviewNotes),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

/// The draft fields that are edited as free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Name,
    StudentId,
    Contact,
    Motivation,
    Activities,
    AdditionalComments,
    InterviewNotes,
}

impl TextField {
    /// Maximum length in characters enforced by input truncation, if any.
    pub fn max_chars(self) -> Option<usize> {
        match self {
            TextField::Motivation | TextField::Activities => Some(1000),
            TextField::AdditionalComments => Some(500),
            TextField::InterviewNotes => Some(300),
            TextField::Name | TextField::StudentId | TextField::Contact => None,
        }
    }

    pub fn field(self) -> Field {
        match self {
            TextField::Name => Field::Name,
            TextField::StudentId => Field::StudentId,
            TextField::Contact => Field::Contact,
            TextField::Motivation => Field::Motivation,
            TextField::Activities => Field::Activities,
            TextField::AdditionalComments => Field::AdditionalComments,
            TextField::InterviewNotes => Field::InterviewNotes,
        }
    }
}

/// The in-progress application, exactly as the recruit form holds it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationDraft {
    pub name: String,
    pub student_id: String,
    pub contact: String,
    pub motivation: String,
    pub activities: String,
    pub interview_times: InterviewSelection,
    pub additional_comments: String,
    pub interview_notes: String,
}

impl ApplicationDraft {
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Name => &self.name,
            TextField::StudentId => &self.student_id,
            TextField::Contact => &self.contact,
            TextField::Motivation => &self.motivation,
            TextField::Activities => &self.activities,
            TextField::AdditionalComments => &self.additional_comments,
            TextField::InterviewNotes => &self.interview_notes,
        }
    }

    pub fn text_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::Name => &mut self.name,
            TextField::StudentId => &mut self.student_id,
            TextField::Contact => &mut self.contact,
            TextField::Motivation => &mut self.motivation,
            TextField::Activities => &mut self.activities,
            TextField::AdditionalComments => &mut self.additional_comments,
            TextField::InterviewNotes => &mut self.interview_notes,
        }
    }
}

/// A validated application ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewApplication {
    pub name: String,
    pub student_id: String,
    pub contact: String,
    pub motivation: String,
    pub activities: String,
    pub interview_times: Vec<InterviewSlot>,
    pub additional_comments: Option<String>,
    pub interview_notes: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

impl NewApplication {
    pub fn from_draft(draft: ApplicationDraft, submitted_at: DateTime<Utc>) -> Self {
        let interview_times = draft.interview_times.selected();
        Self {
            name: draft.name,
            student_id: draft.student_id,
            contact: draft.contact,
            motivation: draft.motivation,
            activities: draft.activities,
            interview_times,
            additional_comments: non_empty(draft.additional_comments),
            interview_notes: non_empty(draft.interview_notes),
            submitted_at,
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

/// A persisted application row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredApplication {
    pub id: String,
    pub name: String,
    pub student_id: String,
    pub contact: String,
    pub motivation: String,
    pub activities: String,
    pub interview_times: Vec<InterviewSlot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_comments: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interview_notes: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
