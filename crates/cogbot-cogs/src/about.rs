//! About cog: describes the bot and the cogs it loaded.

use crate::framework::{Context, Error};
use crate::registry::{Cog, CogHost};
use async_trait::async_trait;

/// Shows information about the bot.
#[poise::command(slash_command, prefix_command)]
pub async fn about(ctx: Context<'_>) -> Result<(), Error> {
    let cogs = &ctx.data().cogs;
    let loaded = if cogs.is_empty() {
        "none".to_string()
    } else {
        cogs.join(", ")
    };

    let response = format!(
        "**Cogbot**\n\
         Discord bot with toggleable cogs and a rotating status.\n\
         Loaded cogs: {loaded}"
    );

    ctx.say(response).await?;
    Ok(())
}

/// Registers the `about` command.
pub struct AboutCog;

#[async_trait]
impl Cog for AboutCog {
    fn name(&self) -> &'static str {
        "about"
    }

    async fn load(&self, host: &mut CogHost) -> cogbot_common::Result<()> {
        host.add_command(about());
        Ok(())
    }
}
