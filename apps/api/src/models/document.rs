use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// What a saved document holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Resume,
    CoverLetter,
    CareerPath,
    Other,
}

impl DocumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Resume => "resume",
            DocumentKind::CoverLetter => "cover_letter",
            DocumentKind::CareerPath => "career_path",
            DocumentKind::Other => "other",
        }
    }
}

/// A generated document the user chose to keep against a profile.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SavedDocumentRow {
    pub id: i64,
    pub profile_id: i64,
    pub title: String,
    pub content: String,
    pub kind: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewSavedDocument {
    pub title: String,
    pub content: String,
    pub kind: DocumentKind,
}
