//! Core bot logic using the Poise framework.

use crate::error::{BotError, BotResult};
use crate::rotator::StatusRotator;
use chrono::{DateTime, Utc};
use cogbot_cogs::{create_framework, CogHost, CogRegistry, CogScanner, Data, ScanReport};
use cogbot_config::Config;
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing::{debug, info};

/// Main bot structure.
pub struct CogBot {
    config: Arc<Config>,
    registry: CogRegistry,
    host: CogHost,
    rotator: Arc<StatusRotator>,
    started_at: DateTime<Utc>,
}

impl CogBot {
    /// Creates a new bot instance serving the built-in cogs.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_registry(config, CogRegistry::builtin())
    }

    /// Creates a new bot instance serving the cogs in `registry`.
    #[must_use]
    pub fn with_registry(config: Config, registry: CogRegistry) -> Self {
        let rotator = Arc::new(StatusRotator::from_config(&config));
        Self {
            config: Arc::new(config),
            registry,
            host: CogHost::new(),
            rotator,
            started_at: Utc::now(),
        }
    }

    /// The bot's configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The status rotator started once the gateway is ready.
    #[must_use]
    pub fn rotator(&self) -> &Arc<StatusRotator> {
        &self.rotator
    }

    /// Extension identifiers loaded so far.
    #[must_use]
    pub fn loaded_cogs(&self) -> &[String] {
        self.host.extensions()
    }

    /// Scans the cogs directory and loads every active cog. Runs before the
    /// connection is opened.
    pub async fn load_cogs(&mut self) -> ScanReport {
        CogScanner::new(&self.config, &self.registry)
            .scan(&mut self.host)
            .await
    }

    /// Connects to Discord and runs until the client stops.
    pub async fn start(self, token: &str) -> BotResult<()> {
        let (commands, cogs) = self.host.into_parts();
        let config = Arc::clone(&self.config);
        let rotator = Arc::clone(&self.rotator);
        let started_at = self.started_at;

        let framework = create_framework(&self.config.bot.command_prefix, commands)
            .setup(move |ctx, ready, framework| {
                Box::pin(async move {
                    info!("Bot connected as {}", ready.user.name);

                    if rotator.start(ctx.clone()).is_none() {
                        debug!("Status rotator already running");
                    }

                    poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                    Ok(Data {
                        config,
                        started_at,
                        cogs,
                    })
                })
            })
            .build();

        let intents = serenity::GatewayIntents::non_privileged();
        let mut client = serenity::ClientBuilder::new(token, intents)
            .framework(framework)
            .await
            .map_err(|e| BotError::Framework(format!("{:?}", e)))?;

        client.start().await?;
        Ok(())
    }
}
