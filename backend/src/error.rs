//! Error type shared by every `/api/recruit` handler.
//!
//! Each variant maps to an HTTP status and to the standard JSON envelope
//! (`{ success: false, message, errors?, error? }`), so handlers return
//! `Result<HttpResponse, AppError>` and propagate with `?`.

use actix_web::error::BlockingError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::api::{ApiResponse, FieldErrorEntry};
use common::i18n::{Locale, Message};
use log::error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("admin key missing or wrong")]
    Unauthorized,

    #[error("application failed validation ({} fields)", .0.len())]
    Validation(Vec<FieldErrorEntry>),

    #[error("application not found")]
    NotFound,

    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A write of a new application failed.
    #[error("could not store application: {0}")]
    Storage(#[source] rusqlite::Error),

    /// A read of stored applications failed.
    #[error("could not read applications: {0}")]
    Lookup(#[source] rusqlite::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("blocking task was cancelled")]
    Blocking(#[from] BlockingError),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl AppError {
    /// Re-labels a database failure as a failed read.
    pub fn into_lookup(self) -> Self {
        match self {
            AppError::Database(e) => AppError::Lookup(e),
            other => other,
        }
    }

    /// Re-labels a database failure as a failed write.
    pub fn into_storage(self) -> Self {
        match self {
            AppError::Database(e) => AppError::Storage(e),
            other => other,
        }
    }

    fn envelope(&self) -> ApiResponse<()> {
        let text = |message: Message| message.text(Locale::Ko);
        match self {
            AppError::Unauthorized => ApiResponse::fail(text(Message::AdminUnauthorized)),
            AppError::Validation(entries) => {
                ApiResponse::invalid(text(Message::SubmitInvalid), entries.clone())
            }
            AppError::NotFound => ApiResponse::fail(text(Message::ApplicationNotFound)),
            AppError::MalformedPayload(_) => {
                ApiResponse::fail(text(Message::ServerError)).with_code("MALFORMED_PAYLOAD")
            }
            AppError::Database(_) => {
                ApiResponse::fail(text(Message::ServerError)).with_code("DATABASE_ERROR")
            }
            AppError::Storage(_) => {
                ApiResponse::fail(text(Message::StorageError)).with_code("DATABASE_ERROR")
            }
            AppError::Lookup(_) => {
                ApiResponse::fail(text(Message::LookupError)).with_code("DATABASE_ERROR")
            }
            AppError::Serialization(_) | AppError::Blocking(_) | AppError::Config(_) => {
                ApiResponse::fail(text(Message::ServerError))
            }
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Validation(_) | AppError::MalformedPayload(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Database(_)
            | AppError::Storage(_)
            | AppError::Lookup(_)
            | AppError::Serialization(_)
            | AppError::Blocking(_)
            | AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!("{}", self);
        }
        HttpResponse::build(status).json(self.envelope())
    }
}
