//! JSON envelopes exchanged between the recruit page, the admin page and
//! `/api/recruit`.
//!
//! Every response uses the same envelope:
//!
//! ```json
//! { "success": true, "message": "...", "data": { ... } }
//! { "success": false, "message": "...", "errors": [{ "field": "contact", "message": "..." }] }
//! ```
//!
//! Optional members are omitted when absent.

use crate::model::application::StoredApplication;
use crate::model::interview::InterviewSlot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A server-reported error scoped to one draft field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrorEntry {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldErrorEntry>>,
    /// Machine-readable failure code, e.g. `DATABASE_ERROR`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl<T> ApiResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            errors: None,
            error: None,
            count: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            errors: None,
            error: None,
            count: None,
        }
    }

    pub fn invalid(message: impl Into<String>, errors: Vec<FieldErrorEntry>) -> Self {
        Self {
            errors: Some(errors),
            ..Self::fail(message)
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.error = Some(code.into());
        self
    }
}

impl<T> ApiResponse<Vec<T>> {
    pub fn ok_list(message: impl Into<String>, items: Vec<T>) -> Self {
        let count = items.len();
        Self {
            count: Some(count),
            ..Self::ok(message, items)
        }
    }
}

/// Returned in `data` when an application is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub application_id: String,
    pub submitted_at: DateTime<Utc>,
    pub applicant_name: String,
    pub selected_interview_times: Vec<InterviewSlot>,
}

pub type SubmitResponse = ApiResponse<SubmissionReceipt>;
pub type ApplicationList = ApiResponse<Vec<StoredApplication>>;
pub type ApplicationDetail = ApiResponse<StoredApplication>;

/// Query string accepted by the admin endpoints (`?admin=...`).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AdminQuery {
    pub admin: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn failure_envelope_omits_absent_members() {
        let body = serde_json::to_value(SubmitResponse::fail("nope")).unwrap();
        assert_eq!(body, json!({ "success": false, "message": "nope" }));
    }

    #[test]
    fn invalid_envelope_carries_field_errors_and_code() {
        let response = SubmitResponse::invalid(
            "bad",
            vec![FieldErrorEntry {
                field: "contact".into(),
                message: "format".into(),
            }],
        )
        .with_code("VALIDATION_ERROR");

        let body = serde_json::to_value(&response).unwrap();
        assert_eq!(body["errors"][0]["field"], "contact");
        assert_eq!(body["error"], "VALIDATION_ERROR");
    }

    #[test]
    fn list_envelope_counts_items() {
        let response = ApiResponse::ok_list("ok", vec![1, 2, 3]);
        assert_eq!(response.count, Some(3));
        assert!(response.success);
    }

    #[test]
    fn receipt_is_camel_case() {
        let raw = json!({
            "success": true,
            "message": "done",
            "data": {
                "applicationId": "abc",
                "submittedAt": "2025-09-01T00:00:00Z",
                "applicantName": "Kim",
                "selectedInterviewTimes": ["9/8(월) 18:00 ~ 19:00"]
            }
        });
        let response: SubmitResponse = serde_json::from_value(raw).unwrap();
        let receipt = response.data.unwrap();
        assert_eq!(receipt.application_id, "abc");
        assert_eq!(receipt.selected_interview_times, vec![InterviewSlot::MondayEighteen]);
    }

    #[test]
    fn detail_envelope_decodes_stored_application() {
        let raw = json!({
            "success": true,
            "message": "found",
            "data": {
                "id": "7f1c",
                "name": "Kim",
                "student_id": "20251234",
                "contact": "010-1234-5678",
                "motivation": "beer",
                "activities": "brewing",
                "interview_times": ["9/9(화) 21:00 ~ 22:00"],
                "submitted_at": "2025-09-01T00:00:00Z",
                "created_at": "2025-09-01T00:00:01Z",
                "updated_at": "2025-09-01T00:00:01Z"
            }
        });
        let response: ApplicationDetail = serde_json::from_value(raw).unwrap();
        let application = response.data.unwrap();
        assert_eq!(application.id, "7f1c");
        assert_eq!(application.interview_times, vec![InterviewSlot::TuesdayTwentyOne]);
        assert_eq!(application.additional_comments, None);
    }

    #[test]
    fn failure_envelope_without_data_decodes() {
        let response: ApplicationDetail =
            serde_json::from_value(json!({ "success": false, "message": "missing" })).unwrap();
        assert!(!response.success);
        assert!(response.data.is_none());
    }
}
