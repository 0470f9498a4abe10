//! Message component interactions (buttons and select menus).
//!
//! Components are attached to messages that outlive the process, so interactions can
//! arrive before the bot has loaded its language data. The router stays disabled until
//! the ready handler enables it and ignores everything received before that.

use std::sync::atomic::{AtomicBool, Ordering};

use dioxus_logger::tracing;
use serenity::all::{
    ComponentInteraction, ComponentInteractionDataKind, CreateInteractionResponse,
    CreateInteractionResponseMessage, GuildId, Http, Permissions,
};

use crate::{
    bot::{embed, locale::strings},
    error::AppError,
    model::language::Language,
    service::language::LanguageService,
    state::BotState,
};

/// Custom id of the language picker shown by `/language`.
pub const LANGUAGE_SELECT: &str = "language_select";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentAction {
    SelectLanguage,
}

/// Maps a component custom id to the action handling it.
pub fn resolve(custom_id: &str) -> Option<ComponentAction> {
    match custom_id {
        LANGUAGE_SELECT => Some(ComponentAction::SelectLanguage),
        _ => None,
    }
}

pub struct ComponentRouter {
    enabled: AtomicBool,
    state: BotState,
}

impl ComponentRouter {
    pub fn new(state: BotState) -> Self {
        Self {
            enabled: AtomicBool::new(false),
            state,
        }
    }

    pub fn enable(&self) {
        self.enabled.store(true, Ordering::Release);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    /// Handles a component interaction.
    ///
    /// Unknown custom ids, and anything received before [`enable`](Self::enable), are
    /// ignored without a response.
    pub async fn route(&self, http: &Http, interaction: &ComponentInteraction) {
        if !self.is_enabled() {
            tracing::debug!(
                "Ignoring component {} received before ready",
                interaction.data.custom_id
            );
            return;
        }

        let Some(action) = resolve(&interaction.data.custom_id) else {
            tracing::debug!("No handler for component {}", interaction.data.custom_id);
            return;
        };

        let response = match action {
            ComponentAction::SelectLanguage => match &interaction.data.kind {
                ComponentInteractionDataKind::StringSelect { values } => {
                    let permissions = interaction
                        .member
                        .as_ref()
                        .and_then(|member| member.permissions);

                    select_language(&self.state, interaction.guild_id, permissions, values).await
                }
                other => Err(AppError::InternalError(format!(
                    "Expected a string select for {}, got {:?}",
                    LANGUAGE_SELECT, other
                ))),
            },
        };

        let message = match response {
            Ok(message) => message,
            Err(e) => {
                tracing::error!(
                    "Failed to handle component {}: {:?}",
                    interaction.data.custom_id,
                    e
                );
                return;
            }
        };

        if let Err(e) = interaction
            .create_response(http, CreateInteractionResponse::UpdateMessage(message))
            .await
        {
            tracing::error!(
                "Failed to respond to component {}: {:?}",
                interaction.data.custom_id,
                e
            );
        }
    }
}

/// Applies a choice from the language picker and returns the updated message.
///
/// Members without Manage Server get the refusal text in place of the picker and the
/// stored language is left unchanged.
pub async fn select_language(
    state: &BotState,
    guild_id: Option<GuildId>,
    permissions: Option<Permissions>,
    values: &[String],
) -> Result<CreateInteractionResponseMessage, AppError> {
    let guild_id = guild_id.ok_or(AppError::NotInGuild)?;
    let service = LanguageService::new(&state.db, &state.languages);
    let current = service.get(guild_id.get()).await;

    if !permissions.is_some_and(|permissions| permissions.manage_guild()) {
        return Ok(CreateInteractionResponseMessage::new()
            .content(strings(current).missing_permission)
            .components(Vec::new()));
    }

    let Some(language) = values.first().and_then(|value| value.parse::<Language>().ok()) else {
        return Ok(CreateInteractionResponseMessage::new()
            .content(strings(current).language_unknown)
            .components(vec![embed::language_menu(strings(current), current)]));
    };

    service.set(guild_id.get(), language).await?;

    let new_strings = strings(language);
    Ok(CreateInteractionResponseMessage::new()
        .content(
            new_strings
                .language_changed
                .replace("{language}", language.native_name()),
        )
        .components(vec![embed::language_menu(new_strings, language)]))
}
