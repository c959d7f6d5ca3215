use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;

use crate::errors::AppError;
use crate::extraction::service;
use crate::state::AppState;
use crate::uploads::read_file_field;

#[derive(Debug, Serialize)]
pub struct ParseResumeResponse {
    pub skills: Vec<String>,
    /// `null` when the document store was unavailable; the skills are still
    /// extracted from the upload.
    pub resume_url: Option<String>,
}

/// POST /parse-resume
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ParseResumeResponse>, AppError> {
    let upload = read_file_field(multipart).await?;
    let outcome = service::parse_resume(
        state.extractor.as_ref(),
        state.store.as_ref(),
        &state.vocabulary,
        &upload.filename,
        upload.bytes,
    )
    .await?;

    Ok(Json(ParseResumeResponse {
        skills: outcome.skills,
        resume_url: outcome.resume_url,
    }))
}
