//! Poise framework setup and command registration logic.

use chrono::{DateTime, Utc};
use cogbot_config::Config;
use std::sync::Arc;

/// Application data accessible in all commands.
pub struct Data {
    /// Application configuration.
    pub config: Arc<Config>,
    /// When the bot process started.
    pub started_at: DateTime<Utc>,
    /// Module paths of the cogs loaded at startup.
    pub cogs: Vec<String>,
}

/// Application error type for commands.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Command context type.
pub type Context<'a> = poise::Context<'a, Data, Error>;

/// Command type contributed by cogs.
pub type Command = poise::Command<Data, Error>;

/// Creates a new Poise framework serving the given cog commands.
pub fn create_framework(
    prefix: &str,
    commands: Vec<Command>,
) -> poise::FrameworkBuilder<Data, Error> {
    poise::Framework::builder().options(poise::FrameworkOptions {
        commands,
        prefix_options: poise::PrefixFrameworkOptions {
            prefix: Some(prefix.to_string()),
            ..Default::default()
        },
        ..Default::default()
    })
}
