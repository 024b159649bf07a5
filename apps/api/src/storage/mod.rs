//! Persistence for career profiles and saved documents.
//!
//! `AppState` holds an `Arc<dyn CareerStore>`: `PgCareerStore` when a
//! database is configured, `MemoryCareerStore` otherwise (and in tests).
//! Document generation never touches the store; only HTTP handlers do.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::document::{NewSavedDocument, SavedDocumentRow};
use crate::models::profile::{CareerProfileRow, NewCareerProfile, ProfileUpdate};

pub use memory::MemoryCareerStore;
pub use postgres::PgCareerStore;

#[async_trait]
pub trait CareerStore: Send + Sync {
    async fn create_profile(&self, profile: NewCareerProfile) -> Result<CareerProfileRow, AppError>;

    async fn get_profile(&self, id: i64) -> Result<Option<CareerProfileRow>, AppError>;

    /// Applies a partial update. `None` when the profile does not exist.
    async fn update_profile(
        &self,
        id: i64,
        update: ProfileUpdate,
    ) -> Result<Option<CareerProfileRow>, AppError>;

    async fn create_document(
        &self,
        profile_id: i64,
        document: NewSavedDocument,
    ) -> Result<SavedDocumentRow, AppError>;

    /// Saved documents for a profile, newest first.
    async fn list_documents(&self, profile_id: i64) -> Result<Vec<SavedDocumentRow>, AppError>;
}
