// Application state (AppState)

use crate::core::config::Config;
use crate::metrics::collector::Metrics;
use crate::stores::user_directory::UserDirectory;
use std::sync::Arc;

/// Shared application state
///
/// Handed to every request handler through axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    /// The user records
    pub directory: Arc<UserDirectory>,

    /// Request and mutation counters
    pub metrics: Arc<Metrics>,

    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Build state with an empty directory; see `startup::seed_directory`
    pub fn new(config: Config) -> Self {
        let directory = UserDirectory::new(config.directory.id_allocation);

        Self {
            directory: Arc::new(directory),
            metrics: Arc::new(Metrics::new()),
            config: Arc::new(config),
        }
    }
}
