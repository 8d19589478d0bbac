use axum::{
    extract::{rejection::FormRejection, State},
    http::header,
    response::{IntoResponse, Response},
    Form,
};
use serde::Deserialize;

use crate::errors::{AppError, PlainTextError};
use crate::letter::template::DOCX_MIME;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LetterForm {
    #[serde(default)]
    pub trainee_id: String,
    #[serde(default)]
    pub phone_last4: String,
}

/// POST /api/v1/letter
///
/// Returns the filled DOCX as an attachment. Failures are plain-text
/// messages, since callers are expecting a file rather than JSON.
pub async fn handle_letter(
    State(state): State<AppState>,
    payload: Result<Form<LetterForm>, FormRejection>,
) -> Result<Response, PlainTextError> {
    let Form(form) = payload.map_err(|e| AppError::InvalidInput(e.body_text()))?;
    let generator = state.letters.clone();
    let letter = tokio::task::spawn_blocking(move || {
        generator.generate(&form.trainee_id, &form.phone_last4)
    })
    .await
    .map_err(AppError::from)??;

    let disposition = format!("attachment; filename=\"{}\"", letter.filename);
    Ok((
        [
            (header::CONTENT_TYPE, DOCX_MIME.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        letter.bytes,
    )
        .into_response())
}
