//! State machine behind the recruitment form.
//!
//! [`RecruitForm`] owns the draft, the per-field error map and the submission
//! flag. The browser component drives it Elm-style:
//!
//! 1. `set_field` / `set_interview_slot` on every edit. Each edit clears the
//!    error recorded for the edited field, without re-validating it.
//! 2. `begin_submit` when the submit button is pressed. It either rejects the
//!    attempt (already in flight, or local validation failed) or flips the
//!    status to `Submitting` and hands back the draft to send.
//! 3. `settle` with whatever the transport produced. The status is back to
//!    `Idle` afterwards, whatever the outcome.
//!
//! [`submit`] runs the same three steps against a [`SubmissionTransport`] for
//! callers that hold the form in a `RefCell`.

use crate::api::{SubmissionReceipt, SubmitResponse};
use crate::i18n::{Locale, Message};
use crate::model::application::{ApplicationDraft, Field, TextField};
use crate::model::interview::InterviewSlot;
use crate::validation::{validate, FieldErrors};
use std::cell::RefCell;
use std::future::Future;
use thiserror::Error;

/// `Settled` only exists while `settle` folds a result in; at rest the form is
/// either `Idle` or `Submitting`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Settled,
}

/// Why `begin_submit` refused to start a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejected {
    AlreadySubmitting,
    Invalid(FieldErrors),
}

/// How a submission settled; carries the banner message to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted {
        message: String,
        receipt: Option<SubmissionReceipt>,
    },
    Rejected {
        message: String,
    },
    NetworkFailure {
        message: String,
    },
}

impl SubmitOutcome {
    pub fn message(&self) -> &str {
        match self {
            SubmitOutcome::Accepted { message, .. }
            | SubmitOutcome::Rejected { message }
            | SubmitOutcome::NetworkFailure { message } => message,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted { .. })
    }
}

/// The request never produced a usable response.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("response could not be decoded: {0}")]
    Decode(String),
}

/// Sends a draft to `POST /api/recruit`.
pub trait SubmissionTransport {
    fn send(
        &self,
        draft: ApplicationDraft,
    ) -> impl Future<Output = Result<SubmitResponse, TransportError>>;
}

#[derive(Debug, Clone, Default)]
pub struct RecruitForm {
    locale: Locale,
    draft: ApplicationDraft,
    errors: FieldErrors,
    status: SubmissionStatus,
    last_outcome: Option<SubmitOutcome>,
}

impl RecruitForm {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            ..Self::default()
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    pub fn draft(&self) -> &ApplicationDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    pub fn last_outcome(&self) -> Option<&SubmitOutcome> {
        self.last_outcome.as_ref()
    }

    /// Overwrites a text field, truncating to the field's cap, and drops any
    /// error recorded for it.
    pub fn set_field(&mut self, field: TextField, value: impl Into<String>) {
        let mut value = value.into();
        if let Some(max) = field.max_chars() {
            if let Some((cut, _)) = value.char_indices().nth(max) {
                value.truncate(cut);
            }
        }
        *self.draft.text_mut(field) = value;
        self.errors.clear_field(field.field());
    }

    pub fn set_interview_slot(&mut self, slot: InterviewSlot, checked: bool) {
        self.draft.interview_times.set(slot, checked);
        self.errors.clear_field(Field::InterviewTimes);
    }

    /// Starts a submission, returning the draft to send.
    pub fn begin_submit(&mut self) -> Result<ApplicationDraft, SubmitRejected> {
        if self.is_submitting() {
            return Err(SubmitRejected::AlreadySubmitting);
        }

        let errors = validate(&self.draft, self.locale);
        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(SubmitRejected::Invalid(errors));
        }

        self.status = SubmissionStatus::Submitting;
        self.last_outcome = None;
        Ok(self.draft.clone())
    }

    /// Applies the transport result of the submission started by `begin_submit`.
    pub fn settle(&mut self, result: Result<SubmitResponse, TransportError>) -> SubmitOutcome {
        self.status = SubmissionStatus::Settled;
        let outcome = match result {
            Ok(response) if response.success => {
                self.draft = ApplicationDraft::default();
                self.errors.clear();
                SubmitOutcome::Accepted {
                    message: response.message,
                    receipt: response.data,
                }
            }
            Ok(response) => {
                if let Some(entries) = &response.errors {
                    self.errors.merge_server(entries);
                }
                let message = if response.message.is_empty() {
                    Message::SubmitError.text(self.locale).to_string()
                } else {
                    response.message
                };
                SubmitOutcome::Rejected { message }
            }
            Err(_) => SubmitOutcome::NetworkFailure {
                message: Message::SubmitNetworkError.text(self.locale).to_string(),
            },
        };

        self.status = SubmissionStatus::Idle;
        self.last_outcome = Some(outcome.clone());
        outcome
    }

    /// Returns to `Idle` when an in-flight submission is abandoned without a
    /// result. The draft and errors are left alone.
    pub fn abandon_submit(&mut self) {
        self.status = SubmissionStatus::Idle;
    }
}

/// Restores `Idle` if the submit future is dropped before settling.
struct InFlight<'a> {
    form: &'a RefCell<RecruitForm>,
    settled: bool,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            if let Ok(mut form) = self.form.try_borrow_mut() {
                form.abandon_submit();
            }
        }
    }
}

/// Validates, sends and settles in one call.
///
/// This is the entry point for callers that can await the whole round trip
/// (headless clients, tests). A UI whose update step cannot await drives the
/// same state machine in two steps instead: `begin_submit` when the user
/// submits, `settle` when the response message arrives. The yew form does
/// this, and since its request task is never cancelled it needs no guard.
///
/// No borrow of `form` is held while the transport is awaited, so a second
/// call made in the meantime sees `Submitting` and is rejected before any
/// request goes out.
pub async fn submit<T: SubmissionTransport>(
    form: &RefCell<RecruitForm>,
    transport: &T,
) -> Result<SubmitOutcome, SubmitRejected> {
    let draft = form.borrow_mut().begin_submit()?;
    let mut in_flight = InFlight {
        form,
        settled: false,
    };

    let result = transport.send(draft).await;

    let outcome = form.borrow_mut().settle(result);
    in_flight.settled = true;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FieldErrorEntry;
    use chrono::Utc;
    use std::cell::Cell;
    use tokio::sync::Notify;
    use tokio::task::yield_now;

    fn filled_form() -> RecruitForm {
        let mut form = RecruitForm::new(Locale::Ko);
        form.set_field(TextField::Name, "홍길동");
        form.set_field(TextField::StudentId, "20250001");
        form.set_field(TextField::Contact, "010-1234-5678");
        form.set_field(TextField::Motivation, "맥주");
        form.set_field(TextField::Activities, "양조");
        form.set_interview_slot(InterviewSlot::MondayTwenty, true);
        form
    }

    fn accepted() -> SubmitResponse {
        SubmitResponse::ok(
            "접수 완료",
            SubmissionReceipt {
                application_id: "id-1".into(),
                submitted_at: Utc::now(),
                applicant_name: "홍길동".into(),
                selected_interview_times: vec![InterviewSlot::MondayTwenty],
            },
        )
    }

    struct GatedTransport {
        calls: Cell<usize>,
        release: Notify,
        response: Result<SubmitResponse, TransportError>,
    }

    impl GatedTransport {
        fn new(response: Result<SubmitResponse, TransportError>) -> Self {
            Self {
                calls: Cell::new(0),
                release: Notify::new(),
                response,
            }
        }
    }

    impl SubmissionTransport for GatedTransport {
        fn send(
            &self,
            _draft: ApplicationDraft,
        ) -> impl Future<Output = Result<SubmitResponse, TransportError>> {
            self.calls.set(self.calls.get() + 1);
            async move {
                self.release.notified().await;
                self.response.clone()
            }
        }
    }

    struct ImmediateTransport(Result<SubmitResponse, TransportError>);

    impl SubmissionTransport for ImmediateTransport {
        fn send(
            &self,
            _draft: ApplicationDraft,
        ) -> impl Future<Output = Result<SubmitResponse, TransportError>> {
            let response = self.0.clone();
            async move { response }
        }
    }

    #[test]
    fn invalid_draft_is_not_sent_and_errors_are_recorded() {
        let mut form = RecruitForm::new(Locale::Ko);
        form.set_field(TextField::StudentId, "1234567");

        let rejected = form.begin_submit().unwrap_err();

        let SubmitRejected::Invalid(errors) = rejected else {
            panic!("expected validation failure");
        };
        assert_eq!(
            errors.get(Field::StudentId),
            Some(Message::StudentIdFormat.text(Locale::Ko))
        );
        assert_eq!(form.errors(), &errors);
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let mut form = RecruitForm::new(Locale::En);
        let _ = form.begin_submit();
        assert!(form.error(Field::Name).is_some());
        assert!(form.error(Field::Contact).is_some());

        form.set_field(TextField::Name, "x");
        assert!(form.error(Field::Name).is_none());
        assert!(form.error(Field::Contact).is_some());

        form.set_interview_slot(InterviewSlot::TuesdayEighteen, false);
        assert!(form.error(Field::InterviewTimes).is_none());
    }

    #[test]
    fn capped_fields_are_truncated_on_input() {
        let mut form = RecruitForm::new(Locale::Ko);
        form.set_field(TextField::InterviewNotes, "가".repeat(350));
        assert_eq!(form.draft().interview_notes.chars().count(), 300);

        form.set_field(TextField::Name, "a".repeat(2000));
        assert_eq!(form.draft().name.len(), 2000);
    }

    #[test]
    fn second_begin_while_submitting_is_rejected() {
        let mut form = filled_form();
        assert!(form.begin_submit().is_ok());
        assert!(form.is_submitting());
        assert_eq!(form.begin_submit(), Err(SubmitRejected::AlreadySubmitting));
    }

    #[test]
    fn success_resets_draft_and_errors() {
        let mut form = filled_form();
        form.begin_submit().unwrap();

        let outcome = form.settle(Ok(accepted()));

        assert!(outcome.is_accepted());
        assert_eq!(form.draft(), &ApplicationDraft::default());
        assert!(form.errors().is_empty());
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.last_outcome(), Some(&outcome));
    }

    #[test]
    fn server_field_errors_are_merged_and_status_returns_to_idle() {
        let mut form = filled_form();
        form.begin_submit().unwrap();

        let outcome = form.settle(Ok(SubmitResponse::invalid(
            "입력 데이터에 오류가 있습니다.",
            vec![FieldErrorEntry {
                field: "contact".into(),
                message: "이미 등록된 연락처입니다.".into(),
            }],
        )));

        assert_eq!(
            outcome,
            SubmitOutcome::Rejected {
                message: "입력 데이터에 오류가 있습니다.".into()
            }
        );
        assert_eq!(form.error(Field::Contact), Some("이미 등록된 연락처입니다."));
        assert_eq!(form.errors().len(), 1);
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.draft().name, "홍길동");
    }

    #[test]
    fn failure_without_message_uses_generic_text() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        let outcome = form.settle(Ok(SubmitResponse::fail("")));
        assert_eq!(outcome.message(), Message::SubmitError.text(Locale::Ko));
    }

    #[test]
    fn transport_error_reports_network_failure() {
        let mut form = filled_form();
        form.set_locale(Locale::En);
        form.begin_submit().unwrap();

        let outcome = form.settle(Err(TransportError::Network("offline".into())));

        assert_eq!(
            outcome,
            SubmitOutcome::NetworkFailure {
                message: Message::SubmitNetworkError.text(Locale::En).into()
            }
        );
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.draft().contact, "010-1234-5678");
    }

    #[tokio::test]
    async fn submit_settles_through_transport() {
        let form = RefCell::new(filled_form());
        let outcome = submit(&form, &ImmediateTransport(Ok(accepted())))
            .await
            .unwrap();
        assert!(outcome.is_accepted());
        assert_eq!(form.borrow().draft(), &ApplicationDraft::default());
    }

    #[tokio::test]
    async fn concurrent_submit_issues_a_single_request() {
        let form = RefCell::new(filled_form());
        let transport = GatedTransport::new(Ok(accepted()));
        let second_done = Cell::new(false);

        let first = submit(&form, &transport);
        let second = async {
            while transport.calls.get() == 0 {
                yield_now().await;
            }
            let result = submit(&form, &transport).await;
            second_done.set(true);
            result
        };
        let release = async {
            while !second_done.get() {
                yield_now().await;
            }
            transport.release.notify_one();
        };

        let (first, second, ()) = tokio::join!(first, second, release);

        assert_eq!(transport.calls.get(), 1);
        assert_eq!(second, Err(SubmitRejected::AlreadySubmitting));
        assert!(first.unwrap().is_accepted());
        assert_eq!(form.borrow().status(), SubmissionStatus::Idle);
    }

    #[tokio::test]
    async fn dropping_an_in_flight_submit_restores_idle() {
        let form = RefCell::new(filled_form());
        let transport = GatedTransport::new(Ok(accepted()));

        tokio::select! {
            biased;
            _ = submit(&form, &transport) => panic!("transport was never released"),
            _ = async {
                while transport.calls.get() == 0 {
                    yield_now().await;
                }
            } => {}
        }

        assert_eq!(form.borrow().status(), SubmissionStatus::Idle);
        assert_eq!(form.borrow().draft().name, "홍길동");
    }
}
