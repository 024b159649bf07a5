use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::errors::AppError;
use crate::models::document::{NewSavedDocument, SavedDocumentRow};
use crate::models::profile::{CareerProfileRow, NewCareerProfile, ProfileUpdate};
use crate::storage::CareerStore;

/// Process-local store used when no database is configured.
#[derive(Default)]
pub struct MemoryCareerStore {
    inner: RwLock<Tables>,
}

#[derive(Default)]
struct Tables {
    profiles: Vec<CareerProfileRow>,
    documents: Vec<SavedDocumentRow>,
}

impl MemoryCareerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CareerStore for MemoryCareerStore {
    async fn create_profile(&self, profile: NewCareerProfile) -> Result<CareerProfileRow, AppError> {
        let mut tables = self.inner.write().await;
        let now = Utc::now();
        let row = CareerProfileRow {
            id: tables.profiles.len() as i64 + 1,
            career_phase: profile.career_phase.as_str().to_string(),
            fields: profile.fields,
            created_at: now,
            updated_at: now,
        };
        tables.profiles.push(row.clone());
        Ok(row)
    }

    async fn get_profile(&self, id: i64) -> Result<Option<CareerProfileRow>, AppError> {
        let tables = self.inner.read().await;
        Ok(tables.profiles.iter().find(|p| p.id == id).cloned())
    }

    async fn update_profile(
        &self,
        id: i64,
        update: ProfileUpdate,
    ) -> Result<Option<CareerProfileRow>, AppError> {
        let mut tables = self.inner.write().await;
        let Some(row) = tables.profiles.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        if let Some(phase) = update.career_phase {
            row.career_phase = phase.as_str().to_string();
        }
        row.fields.merge(update.fields);
        row.updated_at = Utc::now();
        Ok(Some(row.clone()))
    }

    async fn create_document(
        &self,
        profile_id: i64,
        document: NewSavedDocument,
    ) -> Result<SavedDocumentRow, AppError> {
        let mut tables = self.inner.write().await;
        let row = SavedDocumentRow {
            id: tables.documents.len() as i64 + 1,
            profile_id,
            title: document.title,
            content: document.content,
            kind: document.kind.as_str().to_string(),
            created_at: Utc::now(),
        };
        tables.documents.push(row.clone());
        Ok(row)
    }

    async fn list_documents(&self, profile_id: i64) -> Result<Vec<SavedDocumentRow>, AppError> {
        let tables = self.inner.read().await;
        // Insertion order is creation order, so reversing gives newest first.
        Ok(tables
            .documents
            .iter()
            .rev()
            .filter(|d| d.profile_id == profile_id)
            .cloned()
            .collect())
    }
}
