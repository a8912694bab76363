//! # Application Submission Service
//!
//! `POST /api/recruit` accepts an `ApplicationDraft` exactly as the recruit form
//! holds it (camelCase, interview selection keyed by slot label).
//!
//! ## Workflow
//!
//! 1.  **Validation**: the draft goes through `validate_submission`, which is the
//!     form's rule set plus the length caps. Any failure answers `400` with the
//!     per-field errors in `errors`.
//! 2.  **Normalization**: the draft becomes a `NewApplication`. Only the checked
//!     interview slots are kept, empty optional texts are dropped, and the
//!     submission instant is stamped.
//! 3.  **Persistence**: the record is inserted on the blocking pool. A database
//!     failure answers `500` with `error: "DATABASE_ERROR"`.
//! 4.  **Receipt**: `200` with the stored id, the submission time, the applicant
//!     name and the selected slots.

use crate::error::AppError;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use chrono::Utc;
use common::api::{SubmissionReceipt, SubmitResponse};
use common::i18n::{Locale, Message};
use common::model::application::{ApplicationDraft, NewApplication};
use common::validation::validate_submission;
use log::{info, warn};

pub async fn process(
    state: web::Data<AppState>,
    payload: web::Json<ApplicationDraft>,
) -> Result<HttpResponse, AppError> {
    let draft = payload.into_inner();

    let errors = validate_submission(&draft, Locale::Ko);
    if !errors.is_empty() {
        let fields: Vec<&str> = errors.iter().map(|(field, _)| field.as_str()).collect();
        warn!("application rejected, invalid fields: {:?}", fields);
        return Err(AppError::Validation(errors.to_entries()));
    }

    let application = NewApplication::from_draft(draft, Utc::now());
    let store = state.store.clone();
    let stored = web::block(move || store.insert(application))
        .await?
        .map_err(AppError::into_storage)?;

    info!(
        "application {} received ({} interview slots selected)",
        stored.id,
        stored.interview_times.len()
    );

    let receipt = SubmissionReceipt {
        application_id: stored.id,
        submitted_at: stored.submitted_at,
        applicant_name: stored.name,
        selected_interview_times: stored.interview_times,
    };
    Ok(HttpResponse::Ok().json(SubmitResponse::ok(
        Message::SubmitAccepted.text(Locale::Ko),
        receipt,
    )))
}
