//! Guild join and leave handlers.
//!
//! `guild_create` fires for every guild on startup and again after outages; only events
//! flagged as new joins are handled here. On a join the guild gets the default language,
//! the onboarding message is posted in its first text channel and the operator log is
//! notified. `guild_delete` fires both when the bot is removed and when a guild goes
//! unavailable; only removals are reported.
//!
//! The stored language preference is kept when the bot leaves a guild. It is reset to the
//! default if the bot is added again.
//!
//! Everything these handlers do to Discord goes through [`GuildEffects`], implemented for
//! serenity's `Context`.

use dioxus_logger::tracing;
use serenity::all::{
    ChannelId, ChannelType, Context, CreateEmbed, CreateMessage, Guild, GuildChannel, GuildId,
    UnavailableGuild, UserId,
};
use serenity::async_trait;

use crate::{
    bot::{
        embed,
        handler::ready::update_presence,
        locale::strings,
        operator_log::{notify, resolve_log_channel},
    },
    config::LogChannel,
    error::AppError,
    service::language::LanguageService,
    state::BotState,
};

/// Shown when a guild name or owner cannot be looked up.
const UNKNOWN: &str = "Unknown";

/// Discord-side actions of the guild lifecycle handlers.
#[async_trait]
pub trait GuildEffects: Send + Sync {
    /// Display name of a guild member.
    async fn member_name(&self, guild_id: GuildId, user_id: UserId) -> Result<String, AppError>;

    /// Display name of a user, for guilds the bot can no longer see.
    async fn user_name(&self, user_id: UserId) -> Result<String, AppError>;

    async fn send_message(&self, channel: ChannelId, message: CreateMessage)
        -> Result<(), AppError>;

    /// Number of guilds the bot is currently in.
    fn guild_count(&self) -> usize;

    /// Resolves the configured operator log channel, `None` when it is unset or unreachable.
    fn log_channel(&self, target: Option<LogChannel>) -> Option<ChannelId>;

    /// Posts to the operator log without waiting for the result.
    fn notify_operator(&self, channel: ChannelId, embed: CreateEmbed);

    fn set_presence(&self, guild_count: usize);
}

#[async_trait]
impl GuildEffects for Context {
    async fn member_name(&self, guild_id: GuildId, user_id: UserId) -> Result<String, AppError> {
        let member = self.http.get_member(guild_id, user_id).await?;

        Ok(member.display_name().to_string())
    }

    async fn user_name(&self, user_id: UserId) -> Result<String, AppError> {
        let user = self.http.get_user(user_id).await?;

        Ok(user.global_name.unwrap_or(user.name))
    }

    async fn send_message(
        &self,
        channel: ChannelId,
        message: CreateMessage,
    ) -> Result<(), AppError> {
        channel.send_message(&self.http, message).await?;

        Ok(())
    }

    fn guild_count(&self) -> usize {
        self.cache.guild_count()
    }

    fn log_channel(&self, target: Option<LogChannel>) -> Option<ChannelId> {
        resolve_log_channel(&self.cache, target)
    }

    fn notify_operator(&self, channel: ChannelId, embed: CreateEmbed) {
        notify(self.http.clone(), channel, embed);
    }

    fn set_presence(&self, guild_count: usize) {
        update_presence(self, guild_count);
    }
}

/// Handles the guild_create event.
pub async fn handle_guild_create(state: &BotState, ctx: Context, guild: Guild, is_new: Option<bool>) {
    guild_created(state, &ctx, &guild, is_new).await;
}

/// Handles the guild_delete event.
///
/// # Arguments
/// - `incomplete` - Id and availability of the guild
/// - `full` - The guild as it was cached, if it was
pub async fn handle_guild_delete(
    state: &BotState,
    ctx: Context,
    incomplete: UnavailableGuild,
    full: Option<Guild>,
) {
    guild_removed(
        state,
        &ctx,
        incomplete.id,
        incomplete.unavailable,
        full.as_ref(),
    )
    .await;
}

/// Welcomes a guild the bot was just added to.
///
/// Each step is independent: a failed language write or a guild without text channels is
/// logged and the remaining steps still run.
///
/// # Arguments
/// - `state` - Shared bot state
/// - `effects` - Discord actions
/// - `guild` - The guild from the event
/// - `is_new` - `Some(true)` for a fresh join, anything else for a startup or outage replay
pub async fn guild_created(
    state: &BotState,
    effects: &dyn GuildEffects,
    guild: &Guild,
    is_new: Option<bool>,
) {
    if is_new != Some(true) {
        tracing::trace!("Guild {} ({}) is available", guild.name, guild.id);
        return;
    }

    tracing::info!(
        "Joined guild {} ({}) with {} members",
        guild.name,
        guild.id,
        guild.member_count
    );

    if let Err(e) = LanguageService::new(&state.db, &state.languages)
        .set_default(guild.id.get())
        .await
    {
        tracing::error!("Failed to store default language for guild {}: {:?}", guild.id, e);
    }

    match first_text_channel(guild) {
        Some(channel) => match onboarding_message(state, guild).await {
            Ok(message) => {
                if let Err(e) = effects.send_message(channel.id, message).await {
                    tracing::error!(
                        "Failed to send onboarding message to guild {}: {:?}",
                        guild.id,
                        e
                    );
                }
            }
            Err(e) => tracing::error!("Failed to build onboarding message: {:?}", e),
        },
        None => tracing::warn!(
            "Guild {} has no text channel, skipping onboarding message",
            guild.id
        ),
    }

    let guild_count = effects.guild_count();
    effects.set_presence(guild_count);

    let Some(log_channel) = effects.log_channel(state.config.log_channel) else {
        return;
    };

    let owner = match effects.member_name(guild.id, guild.owner_id).await {
        Ok(name) => name,
        Err(e) => {
            tracing::warn!("Failed to look up owner of guild {}: {:?}", guild.id, e);
            UNKNOWN.to_string()
        }
    };
    effects.notify_operator(
        log_channel,
        embed::guild_joined_embed(&guild.name, &owner, guild.member_count, guild_count),
    );
}

/// Reports a guild the bot was removed from.
///
/// Outages (`unavailable`) are only logged. The owner is no longer reachable through the
/// guild after a removal, so only the user profile is looked up.
pub async fn guild_removed(
    state: &BotState,
    effects: &dyn GuildEffects,
    guild_id: GuildId,
    unavailable: bool,
    full: Option<&Guild>,
) {
    if unavailable {
        tracing::warn!("Guild {} became unavailable", guild_id);
        return;
    }

    let guild_name = full.map_or(UNKNOWN, |guild| guild.name.as_str());
    let member_count = full.map_or(0, |guild| guild.member_count);

    tracing::info!("Removed from guild {} ({})", guild_name, guild_id);

    let guild_count = effects.guild_count();
    effects.set_presence(guild_count);

    let Some(log_channel) = effects.log_channel(state.config.log_channel) else {
        return;
    };

    let owner = match full {
        Some(guild) => match effects.user_name(guild.owner_id).await {
            Ok(name) => name,
            Err(e) => {
                tracing::warn!("Failed to look up user {}: {:?}", guild.owner_id, e);
                UNKNOWN.to_string()
            }
        },
        None => UNKNOWN.to_string(),
    };
    effects.notify_operator(
        log_channel,
        embed::guild_left_embed(guild_name, &owner, member_count, guild_count),
    );
}

/// The text channel onboarding messages go to: lowest position, ties broken by id.
pub fn first_text_channel(guild: &Guild) -> Option<&GuildChannel> {
    guild
        .channels
        .values()
        .filter(|channel| channel.kind == ChannelType::Text)
        .min_by_key(|channel| (channel.position, channel.id))
}

/// Onboarding embeds and invite buttons in the guild's language.
async fn onboarding_message(state: &BotState, guild: &Guild) -> Result<CreateMessage, AppError> {
    let strings = strings(state.languages.get(guild.id.get()).await);
    let invite_url = embed::invite_url(state.config.application_id)?;

    Ok(CreateMessage::new()
        .embeds(embed::onboarding_embeds(strings, &guild.name))
        .components(vec![embed::invite_buttons(
            strings,
            &invite_url,
            state.config.support_url.as_ref(),
        )]))
}
