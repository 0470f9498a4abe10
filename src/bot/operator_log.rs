//! Notifications to the operator log channel.
//!
//! Guild join and leave events are reported to one configured channel. Sending is
//! fire-and-forget: the message goes out on its own task and a failure is only logged,
//! so event handling never waits on or fails because of the log channel.

use std::sync::Arc;

use dioxus_logger::tracing;
use serenity::all::{Cache, ChannelId, ChannelType, CreateEmbed, CreateMessage, Guild, Http};

use crate::config::LogChannel;

/// Looks up the configured log channel in the cache.
///
/// # Returns
/// - `Some(ChannelId)` - The channel exists in a guild the bot can see
/// - `None` - No log channel configured, or it cannot be resolved (logged)
pub fn resolve_log_channel(cache: &Cache, target: Option<LogChannel>) -> Option<ChannelId> {
    let target = target?;

    let resolved = match cache.guild(target.guild_id) {
        Some(guild) => channel_in_guild(&guild, target),
        None => None,
    };

    if resolved.is_none() {
        tracing::warn!(
            "Log channel {} in guild {} is not available, skipping notification",
            target.channel_id,
            target.guild_id
        );
    }

    resolved
}

/// Returns the target channel if `guild` is the target guild and has it as a text channel.
fn channel_in_guild(guild: &Guild, target: LogChannel) -> Option<ChannelId> {
    if guild.id != target.guild_id {
        return None;
    }

    guild
        .channels
        .get(&target.channel_id)
        .filter(|channel| channel.kind == ChannelType::Text)
        .map(|channel| channel.id)
}

/// Posts `embed` to `channel` on a separate task.
pub fn notify(http: Arc<Http>, channel: ChannelId, embed: CreateEmbed) {
    tokio::spawn(async move {
        if let Err(e) = channel
            .send_message(&http, CreateMessage::new().embed(embed))
            .await
        {
            tracing::error!("Failed to send operator log message: {:?}", e);
        }
    });
}
