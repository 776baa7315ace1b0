//! Default values matching the on-disk layout the bot expects.

use crate::schema::*;
use std::path::PathBuf;

/// Default token file.
pub const DEFAULT_TOKEN_FILE: &str = "secret.txt";
/// Default cogs root.
pub const DEFAULT_COGS_DIR: &str = "Cogs";
/// Default per-cog options file name.
pub const DEFAULT_OPTIONS_FILE_NAME: &str = "options.json";
/// Default status list.
pub const DEFAULT_STATUS_FILE: &str = "Data/mainfiles/list.txt";
/// Default status rotation interval in seconds.
pub const DEFAULT_STATUS_INTERVAL_SECONDS: u64 = 60;
/// Default text command prefix.
pub const DEFAULT_COMMAND_PREFIX: &str = "!";

impl Default for Config {
    fn default() -> Self {
        Self {
            paths: PathsConfig::default(),
            status: StatusConfig::default(),
            bot: BotConfig::default(),
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            token_file: PathBuf::from(DEFAULT_TOKEN_FILE),
            cogs_dir: PathBuf::from(DEFAULT_COGS_DIR),
            options_file_name: DEFAULT_OPTIONS_FILE_NAME.to_string(),
            status_file: PathBuf::from(DEFAULT_STATUS_FILE),
        }
    }
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            interval_seconds: DEFAULT_STATUS_INTERVAL_SECONDS,
        }
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            command_prefix: DEFAULT_COMMAND_PREFIX.to_string(),
        }
    }
}
