use axum::{
    extract::{rejection::FormRejection, Query, State},
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::lookup::lookup_trainee;
use crate::lookup::page::render_lookup_page;
use crate::roster::schema::LOOKUP_COLUMNS;
use crate::roster::Roster;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct LookupForm {
    pub trainee_id: Option<String>,
    pub last4: Option<String>,
}

/// GET /lookup
///
/// Without query parameters this only shows the form.
pub async fn handle_lookup_get(
    State(state): State<AppState>,
    Query(form): Query<LookupForm>,
) -> Response {
    if form.trainee_id.is_none() && form.last4.is_none() {
        return Html(render_lookup_page(None, None)).into_response();
    }
    lookup_response(state, form).await
}

/// POST /lookup
pub async fn handle_lookup_post(
    State(state): State<AppState>,
    payload: Result<Form<LookupForm>, FormRejection>,
) -> Response {
    match payload {
        Ok(Form(form)) => lookup_response(state, form).await,
        Err(rejection) => error_page(AppError::InvalidInput(rejection.body_text())),
    }
}

async fn lookup_response(state: AppState, form: LookupForm) -> Response {
    let roster_path = state.config.roster_path.clone();
    let columns = state.config.columns.clone();
    let trainee_id = form.trainee_id.unwrap_or_default();
    let last4 = form.last4.unwrap_or_default();

    let result = tokio::task::spawn_blocking(move || {
        let roster = Roster::load(&roster_path, &columns, LOOKUP_COLUMNS)?;
        lookup_trainee(&roster, &trainee_id, &last4).cloned()
    })
    .await
    .map_err(AppError::from)
    .and_then(|r| r);

    match result {
        Ok(record) => Html(render_lookup_page(None, Some(&record))).into_response(),
        Err(err) => error_page(err),
    }
}

fn error_page(err: AppError) -> Response {
    (
        err.status(),
        Html(render_lookup_page(Some(&err.public_message()), None)),
    )
        .into_response()
}
