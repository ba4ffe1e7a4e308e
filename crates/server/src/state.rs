use std::sync::Arc;
use vidora_core::{Config, MovieCatalog, SanitizedConfig};

/// Shared application state
pub struct AppState {
    config: Config,
    /// None when no access token is configured; handlers report the
    /// misconfiguration instead of issuing doomed upstream calls.
    catalog: Option<Arc<dyn MovieCatalog>>,
}

impl AppState {
    pub fn new(config: Config, catalog: Option<Arc<dyn MovieCatalog>>) -> Self {
        Self { config, catalog }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn catalog(&self) -> Option<Arc<dyn MovieCatalog>> {
        self.catalog.clone()
    }
}
