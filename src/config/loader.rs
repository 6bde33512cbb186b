/// Configuration loader
use std::fs;
use std::path::{Path, PathBuf};

use super::embedded::load_embedded_config;
use super::schema::ClientConfig;
use crate::error::ClientError;

impl ClientConfig {
    /// Load and validate configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ClientError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ClientError::ConfigIo {
            path: path.display().to_string(),
            source,
        })?;

        let config: ClientConfig = serde_json::from_str(&content)?;
        config.validate()?;

        Ok(config)
    }
}

/// Path of the config file that sits next to the running executable,
/// named `<executable>.config` (e.g. `myapp.config`)
pub fn adjacent_config_path() -> Result<PathBuf, ClientError> {
    let exe_path = std::env::current_exe().map_err(|source| ClientError::ConfigIo {
        path: "<current executable>".to_string(),
        source,
    })?;

    Ok(PathBuf::from(format!("{}.config", exe_path.display())))
}

/// Load configuration from the adjacent `.config` file
pub fn load_config() -> Result<ClientConfig, ClientError> {
    ClientConfig::from_file(adjacent_config_path()?)
}

/// Pick a configuration: an explicit file wins, then build-time values,
/// then the adjacent `.config` file
pub fn resolve_config(explicit: Option<&Path>) -> Result<ClientConfig, ClientError> {
    if let Some(path) = explicit {
        return ClientConfig::from_file(path);
    }

    match load_embedded_config() {
        Ok(config) => {
            tracing::debug!("using embedded configuration");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(reason = %e, "no embedded configuration, trying .config file");
            load_config()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_valid_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "api_url": "http://localhost:5000/api/v1",
                "app_secret": "secret123",
                "app_name": "demo",
                "version": "2.1"
            }}"#
        )
        .unwrap();

        let config = ClientConfig::from_file(file.path()).unwrap();
        assert_eq!(config.app_secret, "secret123");
        assert_eq!(config.version, "2.1");

        let resolved = resolve_config(Some(file.path())).unwrap();
        assert_eq!(resolved, config);
    }

    #[test]
    fn test_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ invalid json }}").unwrap();

        let err = ClientConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ClientError::ConfigParse(_)));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"api_url": "localhost", "app_secret": "x"}}"#).unwrap();

        let err = ClientConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ClientError::InvalidConfig(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = ClientConfig::from_file("/nonexistent/licensegate.config").unwrap_err();
        assert!(matches!(err, ClientError::ConfigIo { .. }));
    }

    #[test]
    fn test_adjacent_path_suffix() {
        let path = adjacent_config_path().unwrap();
        assert!(path.to_string_lossy().ends_with(".config"));
    }
}
