use std::sync::Arc;

use crate::config::Config;
use crate::extraction::extractor::TextExtractor;
use crate::matching::vocabulary::CompiledVocabulary;
use crate::storage::DocumentStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Skill vocabulary compiled once at startup, read-only thereafter.
    /// Shared across concurrent requests without locking.
    pub vocabulary: Arc<CompiledVocabulary>,
    pub store: Arc<dyn DocumentStore>,
    pub extractor: Arc<dyn TextExtractor>,
    /// Retained for handlers that need runtime settings; the storage timeout
    /// is already baked into the store at startup.
    #[allow(dead_code)]
    pub config: Config,
}
