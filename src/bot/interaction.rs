//! Responding to slash command interactions.
//!
//! Discord requires exactly one initial response per interaction (a reply or a defer),
//! after which only follow-up messages may be sent. Serenity's `CommandInteraction` does
//! not remember whether a response was already sent, so every command is wrapped in a
//! [`SlashCommand`] that records it. Command handlers and the dispatcher only see the
//! [`CommandResponder`] trait, which also lets tests drive them without a gateway.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serenity::all::{
    CommandInteraction, CommandType, CreateInteractionResponse,
    CreateInteractionResponseFollowup, CreateInteractionResponseMessage, GuildId, Http,
    Permissions,
};
use serenity::async_trait;

use crate::error::AppError;

#[async_trait]
pub trait CommandResponder: Send + Sync {
    fn command_name(&self) -> &str;

    fn kind(&self) -> CommandType;

    fn guild_id(&self) -> Option<GuildId>;

    /// Permissions of the invoking member in the channel, `None` outside of guilds.
    fn member_permissions(&self) -> Option<Permissions>;

    /// Value of a string option, if the user supplied it.
    fn string_option(&self, name: &str) -> Option<String>;

    /// Whether the interaction was already replied to or deferred.
    fn is_acknowledged(&self) -> bool;

    async fn reply(&self, message: CreateInteractionResponseMessage) -> Result<(), AppError>;

    async fn defer(&self, ephemeral: bool) -> Result<(), AppError>;

    async fn follow_up(&self, message: CreateInteractionResponseFollowup) -> Result<(), AppError>;
}

/// A live slash command interaction received from the gateway.
pub struct SlashCommand {
    http: Arc<Http>,
    interaction: CommandInteraction,
    acknowledged: AtomicBool,
}

impl SlashCommand {
    pub fn new(http: Arc<Http>, interaction: CommandInteraction) -> Self {
        Self {
            http,
            interaction,
            acknowledged: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl CommandResponder for SlashCommand {
    fn command_name(&self) -> &str {
        &self.interaction.data.name
    }

    fn kind(&self) -> CommandType {
        self.interaction.data.kind
    }

    fn guild_id(&self) -> Option<GuildId> {
        self.interaction.guild_id
    }

    fn member_permissions(&self) -> Option<Permissions> {
        self.interaction
            .member
            .as_ref()
            .and_then(|member| member.permissions)
    }

    fn string_option(&self, name: &str) -> Option<String> {
        self.interaction
            .data
            .options
            .iter()
            .find(|option| option.name == name)
            .and_then(|option| option.value.as_str())
            .map(str::to_owned)
    }

    fn is_acknowledged(&self) -> bool {
        self.acknowledged.load(Ordering::Acquire)
    }

    async fn reply(&self, message: CreateInteractionResponseMessage) -> Result<(), AppError> {
        self.interaction
            .create_response(&self.http, CreateInteractionResponse::Message(message))
            .await?;
        self.acknowledged.store(true, Ordering::Release);

        Ok(())
    }

    async fn defer(&self, ephemeral: bool) -> Result<(), AppError> {
        let response = CreateInteractionResponse::Defer(
            CreateInteractionResponseMessage::new().ephemeral(ephemeral),
        );
        self.interaction.create_response(&self.http, response).await?;
        self.acknowledged.store(true, Ordering::Release);

        Ok(())
    }

    async fn follow_up(&self, message: CreateInteractionResponseFollowup) -> Result<(), AppError> {
        self.interaction.create_followup(&self.http, message).await?;

        Ok(())
    }
}
