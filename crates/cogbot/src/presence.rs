//! Presence updates against a live session.

use cogbot_common::{ActivityKind, Result, StatusEntry};
use poise::serenity_prelude as serenity;

/// A connected session whose displayed activity can be changed.
#[cfg_attr(test, mockall::automock)]
pub trait PresenceSession: Send + Sync {
    /// Replaces the current activity with `entry`.
    fn set_presence(&self, entry: &StatusEntry) -> Result<()>;
}

/// Maps a status entry to the gateway activity payload.
#[must_use]
pub fn activity_for(entry: &StatusEntry) -> serenity::ActivityData {
    let label = entry.label.clone();
    match entry.kind {
        ActivityKind::Playing => serenity::ActivityData::playing(label),
        ActivityKind::Watching => serenity::ActivityData::watching(label),
        ActivityKind::Listening => serenity::ActivityData::listening(label),
        ActivityKind::Competing => serenity::ActivityData::competing(label),
    }
}

impl PresenceSession for serenity::Context {
    fn set_presence(&self, entry: &StatusEntry) -> Result<()> {
        self.set_activity(Some(activity_for(entry)));
        Ok(())
    }
}
