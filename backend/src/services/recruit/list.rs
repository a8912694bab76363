use crate::error::AppError;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use common::api::{AdminQuery, ApplicationList};
use common::i18n::{Locale, Message};

/// `GET /api/recruit?admin=KEY`: every application, newest first.
pub async fn process(
    state: web::Data<AppState>,
    query: web::Query<AdminQuery>,
) -> Result<HttpResponse, AppError> {
    state.authorize(query.admin.as_deref())?;

    let store = state.store.clone();
    let applications = web::block(move || store.list())
        .await?
        .map_err(AppError::into_lookup)?;

    Ok(HttpResponse::Ok().json(ApplicationList::ok_list(
        Message::AdminListed.text(Locale::Ko),
        applications,
    )))
}
