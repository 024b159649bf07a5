//! Download artifacts for generated documents.

use axum::{
    http::header,
    response::{IntoResponse, Response},
};

/// Whitespace runs become '_'; anything outside `[A-Za-z0-9._-]` is dropped
/// so the name is safe inside a Content-Disposition header.
fn file_stem(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

/// "Cover_Letter_Acme_Corp.txt"
pub fn letter_filename(company_name: &str) -> String {
    format!("Cover_Letter_{}.txt", file_stem(company_name))
}

/// "Jane_Doe_resume.html"
pub fn resume_filename(full_name: &str) -> String {
    format!("{}_resume.html", file_stem(full_name))
}

/// A generated document offered as a file download.
#[derive(Debug, Clone)]
pub struct Attachment {
    pub filename: String,
    pub content_type: &'static str,
    pub body: String,
}

impl Attachment {
    pub fn text(filename: String, body: String) -> Self {
        Self {
            filename,
            content_type: "text/plain; charset=utf-8",
            body,
        }
    }

    pub fn html(filename: String, body: String) -> Self {
        Self {
            filename,
            content_type: "text/html; charset=utf-8",
            body,
        }
    }
}

impl IntoResponse for Attachment {
    fn into_response(self) -> Response {
        let disposition = format!("attachment; filename=\"{}\"", self.filename);
        (
            [
                (header::CONTENT_TYPE, self.content_type.to_string()),
                (header::CONTENT_DISPOSITION, disposition),
            ],
            self.body,
        )
            .into_response()
    }
}
