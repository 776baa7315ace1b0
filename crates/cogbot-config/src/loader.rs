//! Configuration loading from an optional TOML override file.

use crate::schema::Config;
use cogbot_common::{CogbotError, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Fixed location of the optional override file.
pub const CONFIG_FILE: &str = "cogbot.toml";

/// Configuration loader.
pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this loader reads.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads configuration from file, falling back to defaults when the file
    /// does not exist. Fields missing from the file keep their defaults.
    pub fn load(&self) -> Result<Config> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No {} found, using default configuration", self.path.display());
                return Ok(Config::default());
            }
            Err(e) => return Err(e.into()),
        };

        let config: Config = toml::from_str(&contents).map_err(|e| {
            CogbotError::Config(format!("Invalid {}: {}", self.path.display(), e))
        })?;

        info!("Loaded configuration from {}", self.path.display());
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new(CONFIG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let loader = ConfigLoader::new(temp.path().join("cogbot.toml"));
        assert_eq!(loader.load().unwrap(), Config::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("cogbot.toml");
        std::fs::write(&path, "[status]\ninterval_seconds = 15\n").unwrap();

        let config = ConfigLoader::new(&path).load().unwrap();
        assert_eq!(config.status.interval(), Duration::from_secs(15));
        assert_eq!(config.paths, Config::default().paths);
        assert_eq!(config.bot.command_prefix, "!");
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("cogbot.toml");
        std::fs::write(&path, "[status\ninterval_seconds = ").unwrap();

        let err = ConfigLoader::new(&path).load().unwrap_err();
        assert!(matches!(err, CogbotError::Config(_)));
    }
}
