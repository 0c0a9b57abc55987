//! Application state for the greeter service.

use std::sync::Arc;
use common::config::AppConfig;
use crate::connector::{ConnectivityProbe, DatabaseConnector};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub probe: Arc<dyn ConnectivityProbe>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(config: AppConfig) -> Self {
        Self {
            probe: Arc::new(DatabaseConnector::new(config.database.clone())),
            config,
        }
    }

    /// Creates a state with a substitute probe.
    #[cfg(test)]
    pub fn with_probe(config: AppConfig, probe: Arc<dyn ConnectivityProbe>) -> Self {
        Self { config, probe }
    }
}
