//! Dashboard application state.

use crate::titles::TitleSet;
use marlin_adapter_mysql::MySqlAdapter;
use marlin_core::MarlinConfig;
use marlin_privileges::GrantChecker;
use std::sync::Arc;

/// Shared application state for the dashboard.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// The loaded configuration.
    config: MarlinConfig,
    /// Adapter over the administered MySQL server.
    adapter: Arc<MySqlAdapter>,
    /// Grants of the connection's authenticated user.
    privileges: Arc<GrantChecker>,
    /// Action-link labels.
    titles: TitleSet,
}

impl AppState {
    /// Create a new application state.
    pub fn new(
        config: MarlinConfig,
        adapter: Arc<MySqlAdapter>,
        privileges: Arc<GrantChecker>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                adapter,
                privileges,
                titles: TitleSet::default(),
            }),
        }
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &MarlinConfig {
        &self.inner.config
    }

    /// Get the database adapter.
    pub fn adapter(&self) -> &MySqlAdapter {
        &self.inner.adapter
    }

    /// Get the privilege checker.
    pub fn privileges(&self) -> &GrantChecker {
        &self.inner.privileges
    }

    /// Get the action-link labels.
    pub fn titles(&self) -> &TitleSet {
        &self.inner.titles
    }

    /// Database opened when a request names none.
    pub fn default_db(&self) -> &str {
        &self.inner.config.upstream.database
    }
}
