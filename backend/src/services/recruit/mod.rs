//! # Recruitment Service Module
//!
//! Routes everything under `/api/recruit` to its handler.
//!
//! ## Sub-modules:
//! - `submit`: validates and stores a new application.
//! - `list`: returns all stored applications to the admin view.
//! - `get`: returns a single stored application to the admin view.

mod get;
mod list;
mod submit;

use crate::error::AppError;
use actix_web::web::{self, get, post, scope};
use actix_web::Scope;

/// The base path for all recruitment endpoints.
const API_PATH: &str = "/api/recruit";

/// Configures and returns the Actix `Scope` for the recruitment routes.
///
/// # Registered Routes:
///
/// *   **`POST /api/recruit`**:
///     - **Handler**: `submit::process`
///     - **Description**: Validates an `ApplicationDraft` and persists it. Answers
///       with a `SubmissionReceipt` envelope, or with per-field `errors` on `400`.
///
/// *   **`GET /api/recruit?admin=KEY`**:
///     - **Handler**: `list::process`
///     - **Description**: Lists all applications, newest first, with `count`.
///       Answers `401` unless `KEY` matches `ADMIN_SECRET_KEY`.
///
/// *   **`GET /api/recruit/{application_id}?admin=KEY`**:
///     - **Handler**: `get::process`
///     - **Description**: Returns one application, or `404`. Uses the same key check.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", post().to(submit::process))
        .route("", get().to(list::process))
        .route("/{application_id}", get().to(get::process))
}

/// JSON extractor settings: size limit, and malformed bodies reported through
/// the standard envelope.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| AppError::MalformedPayload(err.to_string()).into())
}
