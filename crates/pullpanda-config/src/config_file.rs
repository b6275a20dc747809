use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file used when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// Loading or validating the configuration failed
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Read the raw config file content
///
/// Unlike a best-effort search path, a missing file is an error here: the
/// handle list lives in this file, so there is nothing useful to do without
/// it.
pub fn read_config_file(path: &Path) -> Result<String, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Loaded config from {}", path.display());
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_read_error() {
        let path = Path::new("definitely/not/here/config.yaml");
        let err = read_config_file(path).unwrap_err();

        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("definitely/not/here/config.yaml"));
    }
}
