//! Field rules for the recruitment application.
//!
//! Two rule sets share one implementation:
//!
//! - [`validate`] is what the recruit form checks before sending. Length caps
//!   are not checked here because the form truncates input to the cap.
//! - [`validate_submission`] is what `POST /api/recruit` enforces. It adds the
//!   length caps, since a request does not have to come from the form.
//!
//! Both return a [`FieldErrors`] map that is empty iff the draft is submittable.

use crate::api::FieldErrorEntry;
use crate::i18n::{Locale, Message};
use crate::model::application::{ApplicationDraft, Field, TextField};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

static STUDENT_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{8}$").expect("student id pattern"));
static CONTACT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^010-[0-9]{4}-[0-9]{4}$").expect("contact pattern"));

/// Per-field error messages, ordered by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Removes the error for `field`, returning whether one was recorded.
    pub fn clear_field(&mut self, field: Field) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Folds server-reported errors in. Server messages win over local ones for
    /// the fields they name; entries for unknown field names are skipped.
    pub fn merge_server(&mut self, entries: &[FieldErrorEntry]) {
        for entry in entries {
            if let Ok(field) = entry.field.parse::<Field>() {
                self.0.insert(field, entry.message.clone());
            }
        }
    }

    pub fn to_entries(&self) -> Vec<FieldErrorEntry> {
        self.0
            .iter()
            .map(|(field, message)| FieldErrorEntry {
                field: field.as_str().to_string(),
                message: message.clone(),
            })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

/// Client-side rules, checked by the recruit form before sending.
pub fn validate(draft: &ApplicationDraft, locale: Locale) -> FieldErrors {
    let mut errors = FieldErrors::new();
    let mut fail = |field: Field, message: Message| errors.insert(field, message.text(locale));

    if is_blank(&draft.name) {
        fail(Field::Name, Message::NameRequired);
    }

    if is_blank(&draft.student_id) {
        fail(Field::StudentId, Message::StudentIdRequired);
    } else if !STUDENT_ID_RE.is_match(&draft.student_id) {
        fail(Field::StudentId, Message::StudentIdFormat);
    }

    if is_blank(&draft.contact) {
        fail(Field::Contact, Message::ContactRequired);
    } else if !CONTACT_RE.is_match(&draft.contact) {
        fail(Field::Contact, Message::ContactFormat);
    }

    if is_blank(&draft.motivation) {
        fail(Field::Motivation, Message::MotivationRequired);
    }

    if is_blank(&draft.activities) {
        fail(Field::Activities, Message::ActivitiesRequired);
    }

    if !draft.interview_times.any_selected() {
        fail(Field::InterviewTimes, Message::InterviewTimesRequired);
    }

    errors
}

/// Server-side rules: the client rules plus every length cap.
pub fn validate_submission(draft: &ApplicationDraft, locale: Locale) -> FieldErrors {
    let mut errors = validate(draft, locale);

    let caps = [
        (TextField::Motivation, Message::MotivationTooLong),
        (TextField::Activities, Message::ActivitiesTooLong),
        (TextField::AdditionalComments, Message::AdditionalCommentsTooLong),
        (TextField::InterviewNotes, Message::InterviewNotesTooLong),
    ];
    for (field, message) in caps {
        if errors.contains(field.field()) {
            continue;
        }
        if let Some(max) = field.max_chars() {
            if draft.text(field).chars().count() > max {
                errors.insert(field.field(), message.text(locale));
            }
        }
    }

    errors
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::interview::InterviewSlot;

    fn valid_draft() -> ApplicationDraft {
        let mut draft = ApplicationDraft {
            name: "홍길동".into(),
            student_id: "20250001".into(),
            contact: "010-1234-5678".into(),
            motivation: "맥주가 좋아서".into(),
            activities: "IPA 양조".into(),
            ..Default::default()
        };
        draft.interview_times.set(InterviewSlot::MondayNineteen, true);
        draft
    }

    #[test]
    fn valid_draft_has_no_errors() {
        assert!(validate(&valid_draft(), Locale::Ko).is_empty());
        assert!(validate_submission(&valid_draft(), Locale::Ko).is_empty());
    }

    #[test]
    fn empty_draft_reports_every_required_field() {
        let errors = validate(&ApplicationDraft::default(), Locale::En);

        let fields: Vec<Field> = errors.iter().map(|(f, _)| f).collect();
        assert_eq!(
            fields,
            vec![
                Field::Name,
                Field::StudentId,
                Field::Contact,
                Field::Motivation,
                Field::Activities,
                Field::InterviewTimes,
            ]
        );
        assert_eq!(errors.get(Field::StudentId), Some("Please enter your student ID."));
    }

    #[test]
    fn whitespace_only_name_is_required_error() {
        let draft = ApplicationDraft {
            name: "   ".into(),
            ..valid_draft()
        };
        let errors = validate(&draft, Locale::Ko);
        assert_eq!(errors.get(Field::Name), Some(Message::NameRequired.text(Locale::Ko)));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn student_id_must_be_exactly_eight_ascii_digits() {
        let seven = ApplicationDraft {
            student_id: "1234567".into(),
            ..valid_draft()
        };
        let errors = validate(&seven, Locale::Ko);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(Field::StudentId),
            Some(Message::StudentIdFormat.text(Locale::Ko))
        );

        let eight = ApplicationDraft {
            student_id: "12345678".into(),
            ..valid_draft()
        };
        assert!(!validate(&eight, Locale::Ko).contains(Field::StudentId));

        for bad in ["123456789", "1234567a", "１２３４５６７８", " 12345678"] {
            let draft = ApplicationDraft {
                student_id: bad.into(),
                ..valid_draft()
            };
            assert!(validate(&draft, Locale::Ko).contains(Field::StudentId), "{bad}");
        }
    }

    #[test]
    fn contact_must_match_mobile_pattern() {
        let short = ApplicationDraft {
            contact: "010-123-4567".into(),
            ..valid_draft()
        };
        assert_eq!(
            validate(&short, Locale::Ko).get(Field::Contact),
            Some(Message::ContactFormat.text(Locale::Ko))
        );

        let ok = ApplicationDraft {
            contact: "010-1234-5678".into(),
            ..valid_draft()
        };
        assert!(validate(&ok, Locale::Ko).is_empty());

        let landline = ApplicationDraft {
            contact: "02-1234-5678".into(),
            ..valid_draft()
        };
        assert!(validate(&landline, Locale::Ko).contains(Field::Contact));
    }

    #[test]
    fn interview_selection_needs_one_slot() {
        let mut draft = valid_draft();
        draft.interview_times.set(InterviewSlot::MondayNineteen, false);
        let errors = validate(&draft, Locale::Ko);
        assert_eq!(errors.len(), 1);
        assert!(errors.contains(Field::InterviewTimes));

        draft.interview_times.set(InterviewSlot::TuesdayTwentyOne, true);
        assert!(validate(&draft, Locale::Ko).is_empty());
    }

    #[test]
    fn length_caps_are_only_enforced_on_submission() {
        let draft = ApplicationDraft {
            motivation: "가".repeat(1001),
            additional_comments: "a".repeat(501),
            interview_notes: "n".repeat(300),
            ..valid_draft()
        };

        assert!(validate(&draft, Locale::Ko).is_empty());

        let errors = validate_submission(&draft, Locale::Ko);
        assert_eq!(
            errors.get(Field::Motivation),
            Some(Message::MotivationTooLong.text(Locale::Ko))
        );
        assert!(errors.contains(Field::AdditionalComments));
        assert!(!errors.contains(Field::InterviewNotes));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn required_error_wins_over_length_error() {
        let draft = ApplicationDraft {
            activities: " ".repeat(2000),
            ..valid_draft()
        };
        let errors = validate_submission(&draft, Locale::Ko);
        assert_eq!(
            errors.get(Field::Activities),
            Some(Message::ActivitiesRequired.text(Locale::Ko))
        );
    }

    #[test]
    fn merge_server_overrides_and_skips_unknown_fields() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::Contact, "local");
        errors.insert(Field::Name, "keep me");

        errors.merge_server(&[
            FieldErrorEntry {
                field: "contact".into(),
                message: "server".into(),
            },
            FieldErrorEntry {
                field: "favouriteHop".into(),
                message: "ignored".into(),
            },
        ]);

        assert_eq!(errors.get(Field::Contact), Some("server"));
        assert_eq!(errors.get(Field::Name), Some("keep me"));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn entries_use_wire_field_names() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::StudentId, "bad");
        assert_eq!(
            errors.to_entries(),
            vec![FieldErrorEntry {
                field: "studentId".into(),
                message: "bad".into(),
            }]
        );
    }
}
