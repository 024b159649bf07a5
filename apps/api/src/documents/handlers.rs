use axum::{extract::State, response::Html, Json};
use serde::Serialize;

use crate::documents::export::{letter_filename, resume_filename, Attachment};
use crate::documents::letter::{generate_letter, LetterRequest};
use crate::documents::resume::ResumeRequest;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct LetterResponse {
    pub letter: String,
    pub filename: String,
}

#[derive(Debug, Serialize)]
pub struct ResumeResponse {
    pub html: String,
    pub filename: String,
}

/// POST /api/v1/letters
pub async fn handle_generate_letter(
    Json(req): Json<LetterRequest>,
) -> Result<Json<LetterResponse>, AppError> {
    let letter = generate_letter(&req)?;
    Ok(Json(LetterResponse {
        letter,
        filename: letter_filename(req.company_name()),
    }))
}

/// POST /api/v1/letters/download
pub async fn handle_download_letter(
    Json(req): Json<LetterRequest>,
) -> Result<Attachment, AppError> {
    let letter = generate_letter(&req)?;
    Ok(Attachment::text(letter_filename(req.company_name()), letter))
}

/// POST /api/v1/letters/print
pub async fn handle_print_letter(
    State(state): State<AppState>,
    Json(req): Json<LetterRequest>,
) -> Result<Html<String>, AppError> {
    let letter = generate_letter(&req)?;
    let title = format!("Cover Letter - {}", req.company_name().trim());
    Ok(Html(state.renderer.letter_print_page(&title, &letter)?))
}

/// POST /api/v1/resumes
pub async fn handle_generate_resume(
    State(state): State<AppState>,
    Json(req): Json<ResumeRequest>,
) -> Result<Json<ResumeResponse>, AppError> {
    let html = state.renderer.render_resume(&req)?;
    Ok(Json(ResumeResponse {
        html,
        filename: resume_filename(&req.personal().full_name),
    }))
}

/// POST /api/v1/resumes/download
pub async fn handle_download_resume(
    State(state): State<AppState>,
    Json(req): Json<ResumeRequest>,
) -> Result<Attachment, AppError> {
    let fragment = state.renderer.render_resume(&req)?;
    let full_name = &req.personal().full_name;
    let page = state.renderer.resume_page(full_name, &fragment)?;
    Ok(Attachment::html(resume_filename(full_name), page))
}
