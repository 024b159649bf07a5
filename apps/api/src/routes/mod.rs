pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::documents::handlers as documents;
use crate::extraction::handlers as extraction;
use crate::profiles::handlers as profiles;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        // Cover letters
        .route("/api/v1/letters", post(documents::handle_generate_letter))
        .route(
            "/api/v1/letters/download",
            post(documents::handle_download_letter),
        )
        .route("/api/v1/letters/print", post(documents::handle_print_letter))
        // Resumes
        .route("/api/v1/resumes", post(documents::handle_generate_resume))
        .route(
            "/api/v1/resumes/download",
            post(documents::handle_download_resume),
        )
        // Field extraction
        .route("/api/v1/extract", post(extraction::handle_extract))
        .route(
            "/api/v1/extract/upload",
            post(extraction::handle_extract_upload).layer(upload_limit),
        )
        // Profiles
        .route("/api/v1/profiles", post(profiles::handle_create_profile))
        .route(
            "/api/v1/profiles/:id",
            get(profiles::handle_get_profile).patch(profiles::handle_update_profile),
        )
        .route(
            "/api/v1/profiles/:id/letter-defaults",
            get(profiles::handle_letter_defaults),
        )
        .route(
            "/api/v1/profiles/:id/resume-defaults",
            get(profiles::handle_resume_defaults),
        )
        .route(
            "/api/v1/profiles/:id/guidance",
            get(profiles::handle_guidance),
        )
        .route(
            "/api/v1/profiles/:id/documents",
            get(profiles::handle_list_documents).post(profiles::handle_save_document),
        )
        .with_state(state)
}
