//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::AnalysisConfig;
use crate::db::repository::FieldRepository;
use crate::providers::Providers;

/// Shared application state passed to all handlers.
///
/// The repository and the model collaborators are constructed once at
/// process start and injected here; handlers never reach for globals.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for field registry operations
    pub repository: Arc<dyn FieldRepository>,
    /// External collaborators: reducer, classifier, risk model
    pub providers: Providers,
    /// Validated analysis parameters
    pub config: Arc<AnalysisConfig>,
}

impl AppState {
    /// Create a new application state with the given capabilities.
    pub fn new(
        repository: Arc<dyn FieldRepository>,
        providers: Providers,
        config: Arc<AnalysisConfig>,
    ) -> Self {
        Self {
            repository,
            providers,
            config,
        }
    }
}
