//! Application configuration
//!
//! Configuration loaded from the YAML file passed with `--config`.

use crate::config_file::{read_config_file, ConfigError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Status searched when the config does not list any
pub const DEFAULT_STATUS: &str = "merged";

/// Application configuration loaded from config.yaml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// GitHub handles whose pull requests are counted, in report order
    #[serde(default)]
    pub handles: Vec<String>,

    /// Organizations to restrict the search to (takes precedence over repos)
    #[serde(default)]
    pub orgs: Vec<String>,

    /// Repositories (`owner/name`) to restrict the search to
    #[serde(default)]
    pub repos: Vec<String>,

    /// PR states to count, one table column each
    #[serde(default = "default_statuses")]
    pub statuses: Vec<String>,

    /// Upper bound on handles fetched at the same time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_concurrency: Option<usize>,
}

fn default_statuses() -> Vec<String> {
    vec![DEFAULT_STATUS.to_string()]
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            handles: Vec::new(),
            orgs: Vec::new(),
            repos: Vec::new(),
            statuses: default_statuses(),
            max_concurrency: None,
        }
    }
}

impl AppConfig {
    /// Load and validate the config file at `path`
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = read_config_file(path)?;
        let config: AppConfig =
            serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let config = config.normalized()?;
        log::info!(
            "Loaded config: {} handles, {} orgs, {} repos, statuses {:?}",
            config.handles.len(),
            config.orgs.len(),
            config.repos.len(),
            config.statuses
        );
        Ok(config)
    }

    /// Apply defaults the YAML cannot express and reject unusable values
    ///
    /// An explicitly empty `statuses` list falls back to `["merged"]`.
    pub fn normalized(mut self) -> Result<Self, ConfigError> {
        if self.statuses.is_empty() {
            self.statuses = default_statuses();
        }

        check_entries("handles", &self.handles)?;
        check_entries("orgs", &self.orgs)?;
        check_entries("repos", &self.repos)?;
        check_entries("statuses", &self.statuses)?;

        if self.max_concurrency == Some(0) {
            return Err(ConfigError::Invalid(
                "max_concurrency must be at least 1".to_string(),
            ));
        }

        if self.handles.is_empty() {
            log::warn!("Config lists no handles, the report will be empty");
        }
        if !self.orgs.is_empty() && !self.repos.is_empty() {
            log::warn!("Both orgs and repos are configured; repos are ignored");
        }

        Ok(self)
    }
}

fn check_entries(key: &str, values: &[String]) -> Result<(), ConfigError> {
    match values.iter().position(|v| v.trim().is_empty()) {
        Some(index) => Err(ConfigError::Invalid(format!(
            "{}[{}] must not be empty",
            key, index
        ))),
        None => Ok(()),
    }
}
