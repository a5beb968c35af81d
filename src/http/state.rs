//! Shared state for HTTP handlers.

use std::sync::Arc;

use crate::app::services::station_locator::StationLocator;
use crate::config::Config;

/// Read-only application state injected into every handler
///
/// The configuration is resolved once at startup; handlers never mutate it.
/// Per-request work (file discovery, parsing) happens inside the handler and
/// is discarded with the response.
#[derive(Debug, Clone)]
pub struct AppState {
    config: Arc<Config>,
}

impl AppState {
    /// Create state around a resolved configuration
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// A locator over the configured data directory
    pub fn locator(&self) -> StationLocator {
        StationLocator::new(&self.config.data_dir)
    }
}
