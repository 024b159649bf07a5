use std::sync::Arc;

use crate::config::Config;
use crate::documents::resume::DocumentRenderer;
use crate::storage::CareerStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Profile and saved-document persistence. Postgres or in-memory,
    /// chosen at startup from `DATABASE_URL`.
    pub store: Arc<dyn CareerStore>,
    /// Compiled resume and print templates.
    pub renderer: Arc<DocumentRenderer>,
}
