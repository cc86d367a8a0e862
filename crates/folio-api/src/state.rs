//! Shared application state.

use std::sync::Arc;

use folio_core::repository::ProfileRepository;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Profile persistence, injected at startup.
    pub repository: Arc<dyn ProfileRepository>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }
}
