use axum::{extract::Multipart, Json};
use serde::{Deserialize, Serialize};

use crate::documents::letter::LetterRequestBuilder;
use crate::documents::resume::ResumeRequestBuilder;
use crate::errors::AppError;
use crate::extraction::extractor::{extract_fields, ExtractedFields};
use crate::extraction::upload::{decode_upload, UploadKind};

/// Drafts the caller wants seeded with the extracted fields.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Drafts {
    pub letter: Option<LetterRequestBuilder>,
    pub resume: Option<ResumeRequestBuilder>,
}

impl Drafts {
    fn seed(self, fields: ExtractedFields) -> ExtractResponse {
        ExtractResponse {
            letter: self.letter.map(|draft| fields.apply_to_letter(draft)),
            resume: self.resume.map(|draft| fields.apply_to_resume(draft)),
            fields,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub raw_text: String,
    #[serde(flatten)]
    pub drafts: Drafts,
}

/// Extracted fields, plus each supplied draft with those fields applied.
#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    #[serde(flatten)]
    pub fields: ExtractedFields,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter: Option<LetterRequestBuilder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume: Option<ResumeRequestBuilder>,
}

/// POST /api/v1/extract
pub async fn handle_extract(
    Json(req): Json<ExtractRequest>,
) -> Result<Json<ExtractResponse>, AppError> {
    let fields = extract_fields(&req.raw_text);
    Ok(Json(req.drafts.seed(fields)))
}

/// POST /api/v1/extract/upload
/// Multipart body with the resume in a field named `file` (PDF or text).
/// Optional `letter` and `resume` fields carry JSON drafts to seed.
pub async fn handle_extract_upload(
    mut multipart: Multipart,
) -> Result<Json<ExtractResponse>, AppError> {
    let mut upload = None;
    let mut drafts = Drafts::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Could not read upload: {e}")))?;
                let kind =
                    UploadKind::detect(file_name.as_deref(), content_type.as_deref(), &bytes);
                upload = Some((kind, bytes.to_vec()));
            }
            Some("letter") => drafts.letter = Some(draft_from_field(field).await?),
            Some("resume") => drafts.resume = Some(draft_from_field(field).await?),
            _ => {}
        }
    }

    let (kind, bytes) = upload.ok_or_else(|| {
        AppError::Validation("Multipart body has no `file` field".to_string())
    })?;
    let text = decode_upload(kind, bytes).await?;
    let fields = extract_fields(&text);
    tracing::info!("Extracted {} fields from {kind:?} upload", fields.populated());
    Ok(Json(drafts.seed(fields)))
}

async fn draft_from_field<T>(field: axum::extract::multipart::Field<'_>) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    let name = field.name().unwrap_or_default().to_string();
    let text = field
        .text()
        .await
        .map_err(|e| AppError::Validation(format!("Could not read `{name}` field: {e}")))?;
    serde_json::from_str(&text)
        .map_err(|e| AppError::Validation(format!("Invalid `{name}` draft: {e}")))
}
