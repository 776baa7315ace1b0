//! Main entry point for Cogbot.

use cogbot::{BotResult, CogBot};
use cogbot_config::{read_token, ConfigLoader};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> BotResult<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cogbot=info,cogbot_cogs=info,cogbot_config=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Cogbot");

    let config = ConfigLoader::default().load()?;
    config.validate()?;

    let mut bot = CogBot::new(config);
    bot.load_cogs().await;

    // Nothing can run without a token
    let token = match read_token(&bot.config().paths.token_file) {
        Ok(token) => token,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = bot.start(&token).await {
        error!("Bot failed to start: {}", e);
        return Err(e);
    }

    Ok(())
}
