//! Decoding uploaded resume files to plain text.

use tracing::{debug, warn};

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Pdf,
    Text,
}

impl UploadKind {
    /// PDF when the bytes carry the PDF magic number or the client said so;
    /// anything else is read as text.
    pub fn detect(file_name: Option<&str>, content_type: Option<&str>, bytes: &[u8]) -> Self {
        let named_pdf = file_name
            .map(|name| name.to_ascii_lowercase().ends_with(".pdf"))
            .unwrap_or(false);
        if bytes.starts_with(b"%PDF") || content_type == Some("application/pdf") || named_pdf {
            UploadKind::Pdf
        } else {
            UploadKind::Text
        }
    }
}

/// Decodes an upload to text. Text is read as UTF-8 with invalid sequences
/// replaced. PDF parsing runs on the blocking pool.
pub async fn decode_upload(kind: UploadKind, bytes: Vec<u8>) -> Result<String, AppError> {
    let size = bytes.len();
    let text = match kind {
        UploadKind::Text => String::from_utf8_lossy(&bytes).into_owned(),
        UploadKind::Pdf => {
            let extracted =
                tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
                    .await;
            match extracted {
                Ok(Ok(text)) => text,
                Ok(Err(e)) => {
                    warn!("PDF text extraction failed: {e}");
                    return Err(unreadable_pdf());
                }
                // pdf-extract panics on some malformed documents.
                Err(e) if e.is_panic() => {
                    warn!("PDF text extraction panicked");
                    return Err(unreadable_pdf());
                }
                Err(e) => {
                    return Err(AppError::Internal(anyhow::anyhow!(
                        "spawn_blocking failed in PDF decode: {e}"
                    )))
                }
            }
        }
    };

    if text.trim().is_empty() {
        return Err(AppError::UnprocessableEntity(
            "The uploaded file contains no readable text".to_string(),
        ));
    }

    debug!("Decoded {kind:?} upload: {size} bytes -> {} chars", text.len());
    Ok(text)
}

fn unreadable_pdf() -> AppError {
    AppError::UnprocessableEntity("Could not read text from the uploaded PDF".to_string())
}
