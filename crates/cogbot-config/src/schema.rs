//! Configuration schema definitions using serde.

use cogbot_common::CogbotError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Main configuration structure for Cogbot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File and directory locations.
    pub paths: PathsConfig,
    /// Status rotation configuration.
    pub status: StatusConfig,
    /// Bot framework configuration.
    pub bot: BotConfig,
}

/// File and directory locations, relative to the working directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// File holding the bot token.
    pub token_file: PathBuf,
    /// Root directory containing one subdirectory per cog.
    pub cogs_dir: PathBuf,
    /// Name of the per-cog options file.
    pub options_file_name: String,
    /// Newline-delimited status list.
    pub status_file: PathBuf,
}

/// Status rotation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusConfig {
    /// Seconds between presence updates.
    pub interval_seconds: u64,
}

/// Bot framework configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Prefix for text commands.
    pub command_prefix: String,
}

impl StatusConfig {
    /// The rotation interval as a `Duration`.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_seconds)
    }
}

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), CogbotError> {
        if self.paths.token_file.as_os_str().is_empty() {
            return Err(CogbotError::Config("Token file path cannot be empty".to_string()));
        }

        if self.paths.cogs_dir.as_os_str().is_empty() {
            return Err(CogbotError::Config("Cogs directory cannot be empty".to_string()));
        }

        if self.paths.options_file_name.is_empty() {
            return Err(CogbotError::Config(
                "Options file name cannot be empty".to_string(),
            ));
        }

        if self.paths.status_file.as_os_str().is_empty() {
            return Err(CogbotError::Config("Status file path cannot be empty".to_string()));
        }

        if self.status.interval_seconds == 0 {
            return Err(CogbotError::Config(
                "Status interval must be at least one second".to_string(),
            ));
        }

        if self.bot.command_prefix.is_empty() {
            return Err(CogbotError::Config("Command prefix cannot be empty".to_string()));
        }

        Ok(())
    }

    /// The cogs root rendered as a module path segment, e.g. `Cogs`.
    #[must_use]
    pub fn cogs_module_root(&self) -> String {
        self.paths
            .cogs_dir
            .file_name()
            .map_or_else(
                || self.paths.cogs_dir.to_string_lossy().into_owned(),
                |name| name.to_string_lossy().into_owned(),
            )
    }
}
