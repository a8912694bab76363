use crate::error::AppError;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use common::api::{AdminQuery, ApplicationDetail};
use common::i18n::{Locale, Message};

/// `GET /api/recruit/{application_id}?admin=KEY`: a single application.
///
/// Returns `404` when no application has that id.
pub async fn process(
    state: web::Data<AppState>,
    application_id: web::Path<String>,
    query: web::Query<AdminQuery>,
) -> Result<HttpResponse, AppError> {
    state.authorize(query.admin.as_deref())?;

    let store = state.store.clone();
    let id = application_id.into_inner();
    let application = web::block(move || store.get(&id))
        .await?
        .map_err(AppError::into_lookup)?
        .ok_or(AppError::NotFound)?;

    Ok(HttpResponse::Ok().json(ApplicationDetail::ok(
        Message::AdminFound.text(Locale::Ko),
        application,
    )))
}
