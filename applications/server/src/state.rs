/// Shared application state
use crate::config::ApiVariant;
use std::sync::Arc;
use tasklist_core::TaskStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TaskStore>,
    pub variant: ApiVariant,
}

impl AppState {
    pub fn new(store: Arc<dyn TaskStore>, variant: ApiVariant) -> Self {
        Self { store, variant }
    }
}
