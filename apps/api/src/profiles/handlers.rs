use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::documents::defaults::{letter_defaults, resume_defaults};
use crate::documents::guidance::{guidance_for, CareerGuidance};
use crate::documents::letter::LetterRequestBuilder;
use crate::documents::phase::CareerPhase;
use crate::documents::resume::ResumeRequestBuilder;
use crate::errors::AppError;
use crate::models::document::{NewSavedDocument, SavedDocumentRow};
use crate::models::profile::{CareerProfileRow, NewCareerProfile, ProfileUpdate};
use crate::state::AppState;

async fn load_profile(state: &AppState, id: i64) -> Result<CareerProfileRow, AppError> {
    state
        .store
        .get_profile(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Profile {id} not found")))
}

/// POST /api/v1/profiles
pub async fn handle_create_profile(
    State(state): State<AppState>,
    Json(req): Json<NewCareerProfile>,
) -> Result<(StatusCode, Json<CareerProfileRow>), AppError> {
    let profile = state.store.create_profile(req).await?;
    tracing::info!(
        "Created profile {} ({})",
        profile.id,
        profile.phase().as_str()
    );
    Ok((StatusCode::CREATED, Json(profile)))
}

/// GET /api/v1/profiles/:id
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CareerProfileRow>, AppError> {
    Ok(Json(load_profile(&state, id).await?))
}

/// PATCH /api/v1/profiles/:id
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<ProfileUpdate>,
) -> Result<Json<CareerProfileRow>, AppError> {
    let profile = state
        .store
        .update_profile(id, req)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Profile {id} not found")))?;
    Ok(Json(profile))
}

/// GET /api/v1/profiles/:id/letter-defaults
pub async fn handle_letter_defaults(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<LetterRequestBuilder>, AppError> {
    let profile = load_profile(&state, id).await?;
    Ok(Json(letter_defaults(&profile)))
}

/// GET /api/v1/profiles/:id/resume-defaults
pub async fn handle_resume_defaults(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ResumeRequestBuilder>, AppError> {
    let profile = load_profile(&state, id).await?;
    Ok(Json(resume_defaults(&profile)))
}

/// GET /api/v1/profiles/:id/guidance
/// Unrecognised stored phases get the general plan.
pub async fn handle_guidance(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CareerGuidance>, AppError> {
    let profile = load_profile(&state, id).await?;
    Ok(Json(guidance_for(CareerPhase::parse(&profile.career_phase))))
}

/// POST /api/v1/profiles/:id/documents
pub async fn handle_save_document(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<NewSavedDocument>,
) -> Result<(StatusCode, Json<SavedDocumentRow>), AppError> {
    if req.title.trim().is_empty() {
        return Err(AppError::Validation("title must not be blank".to_string()));
    }
    if req.content.trim().is_empty() {
        return Err(AppError::Validation("content must not be blank".to_string()));
    }
    load_profile(&state, id).await?;

    let document = state.store.create_document(id, req).await?;
    Ok((StatusCode::CREATED, Json(document)))
}

/// GET /api/v1/profiles/:id/documents
pub async fn handle_list_documents(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<SavedDocumentRow>>, AppError> {
    load_profile(&state, id).await?;
    Ok(Json(state.store.list_documents(id).await?))
}
