//! Configuration types for the Marlin console.
//!
//! Configuration is loaded from a single YAML file (`marlin.yaml`) with a
//! section per concern:
//!
//! - **upstream**: the MySQL server the console administers
//! - **dashboard**: where the web UI listens

pub mod dashboard;
pub mod upstream;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub use dashboard::DashboardConfig;
pub use upstream::UpstreamConfig;

/// Complete Marlin configuration loaded from a file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarlinConfig {
    /// Project name.
    #[serde(default)]
    pub project: Option<String>,

    /// Configuration version.
    #[serde(default)]
    pub version: Option<String>,

    /// Upstream MySQL connection.
    pub upstream: UpstreamConfig,

    /// Dashboard settings.
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

impl MarlinConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_yaml(&contents)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(contents).map_err(ConfigError::Parse)
    }
}

impl Default for MarlinConfig {
    fn default() -> Self {
        Self {
            project: None,
            version: None,
            upstream: UpstreamConfig::default(),
            dashboard: DashboardConfig::default(),
        }
    }
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid YAML for this schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_config() {
        let yaml = r#"
upstream:
  host: db.internal
  database: inventory
  username: admin
"#;
        let config = MarlinConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.upstream.host, "db.internal");
        assert_eq!(config.upstream.database, "inventory");
        assert_eq!(config.dashboard.port, 8080);
    }

    #[test]
    fn rejects_config_without_upstream() {
        assert!(MarlinConfig::from_yaml("project: demo").is_err());
    }
}
