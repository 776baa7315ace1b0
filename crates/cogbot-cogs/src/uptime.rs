//! Uptime cog.

use crate::framework::{Context, Error};
use crate::registry::{Cog, CogHost};
use async_trait::async_trait;
use chrono::Utc;
use cogbot_common::format_uptime;

/// Shows bot uptime.
#[poise::command(slash_command, prefix_command)]
pub async fn uptime(ctx: Context<'_>) -> Result<(), Error> {
    let started_at = ctx.data().started_at;
    let elapsed = (Utc::now() - started_at).to_std().unwrap_or_default();

    let response = format!(
        "Bot uptime: {} (since {})",
        format_uptime(elapsed),
        started_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    ctx.say(response).await?;
    Ok(())
}

/// Registers the `uptime` command.
pub struct UptimeCog;

#[async_trait]
impl Cog for UptimeCog {
    fn name(&self) -> &'static str {
        "uptime"
    }

    async fn load(&self, host: &mut CogHost) -> cogbot_common::Result<()> {
        host.add_command(uptime());
        Ok(())
    }
}
