use serenity::all::{
    CommandOptionType, CreateCommand, CreateCommandOption, CreateInteractionResponseMessage,
    Permissions,
};
use serenity::async_trait;

use crate::{
    bot::{
        command::{CommandHandler, CommandModule},
        embed,
        interaction::CommandResponder,
        locale::strings,
    },
    error::AppError,
    model::language::Language,
    service::language::LanguageService,
    state::BotState,
};

pub struct SetLanguage;

pub fn module() -> CommandModule {
    CommandModule::new("config/language", register(), SetLanguage)
}

pub fn register() -> CreateCommand {
    let option = Language::ALL.into_iter().fold(
        CreateCommandOption::new(
            CommandOptionType::String,
            "language",
            "The language the bot should speak in this server",
        )
        .required(false),
        |option, language| option.add_string_choice(language.native_name(), language.code()),
    );

    CreateCommand::new("language")
        .description("Show or change the language the bot speaks in this server")
        .default_member_permissions(Permissions::MANAGE_GUILD)
        .dm_permission(false)
        .add_option(option)
}

#[async_trait]
impl CommandHandler for SetLanguage {
    /// Shows the current language with a picker, or stores the language given as option.
    ///
    /// Requires Manage Server. Servers can override the default command visibility.
    async fn execute(
        &self,
        state: &BotState,
        interaction: &dyn CommandResponder,
    ) -> Result<(), AppError> {
        let Some(guild_id) = interaction.guild_id() else {
            return reply_ephemeral(interaction, strings(Language::default()).guild_only).await;
        };

        let service = LanguageService::new(&state.db, &state.languages);
        let current = service.get(guild_id.get()).await;
        let current_strings = strings(current);

        let can_manage = interaction
            .member_permissions()
            .is_some_and(|permissions| permissions.manage_guild());
        if !can_manage {
            return reply_ephemeral(interaction, current_strings.missing_permission).await;
        }

        let Some(requested) = interaction.string_option("language") else {
            return interaction
                .reply(
                    CreateInteractionResponseMessage::new()
                        .content(
                            current_strings
                                .language_current
                                .replace("{language}", current.native_name()),
                        )
                        .components(vec![embed::language_menu(current_strings, current)])
                        .ephemeral(true),
                )
                .await;
        };

        let Ok(language) = requested.parse::<Language>() else {
            return reply_ephemeral(interaction, current_strings.language_unknown).await;
        };

        service.set(guild_id.get(), language).await?;

        let new_strings = strings(language);
        interaction
            .reply(
                CreateInteractionResponseMessage::new().content(
                    new_strings
                        .language_changed
                        .replace("{language}", language.native_name()),
                ),
            )
            .await
    }
}

async fn reply_ephemeral(interaction: &dyn CommandResponder, content: &str) -> Result<(), AppError> {
    interaction
        .reply(
            CreateInteractionResponseMessage::new()
                .content(content)
                .ephemeral(true),
        )
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::{interaction::mock::MockInteraction, test_support::test_state};
    use crate::data::guild_preference::GuildPreferenceRepository;

    /// Tests that choosing a language stores it and confirms in the new language.
    ///
    /// Expected: Ok with French cached, stored and used in the reply
    #[tokio::test]
    async fn stores_chosen_language() -> Result<(), AppError> {
        let state = test_state().await;
        let interaction = MockInteraction::new("language").with_option("language", "french");

        SetLanguage.execute(&state, &interaction).await?;

        assert_eq!(state.languages.get(1).await, Language::French);
        let stored = GuildPreferenceRepository::new(&state.db)
            .find_by_guild_id(1)
            .await?
            .unwrap();
        assert_eq!(stored.language, Language::French);

        let replies = interaction.replies();
        assert_eq!(replies.len(), 1);
        assert!(replies[0]["content"]
            .as_str()
            .unwrap()
            .starts_with("Je parle désormais"));

        Ok(())
    }

    /// Tests that omitting the option shows the current language and the picker.
    ///
    /// Expected: Ok with one ephemeral reply carrying a select menu
    #[tokio::test]
    async fn shows_current_language_without_option() -> Result<(), AppError> {
        let state = test_state().await;
        let interaction = MockInteraction::new("language");

        SetLanguage.execute(&state, &interaction).await?;

        let replies = interaction.replies();
        assert_eq!(replies.len(), 1);
        assert!(replies[0]["content"].as_str().unwrap().contains("English"));
        assert_eq!(replies[0]["flags"], 64);
        assert_eq!(
            replies[0]["components"][0]["components"][0]["custom_id"],
            "language_select"
        );

        Ok(())
    }

    /// Tests that members without Manage Server cannot change the language.
    ///
    /// Expected: Ok with a refusal and the cache left untouched
    #[tokio::test]
    async fn refuses_members_without_manage_guild() -> Result<(), AppError> {
        let state = test_state().await;
        let interaction = MockInteraction::new("language")
            .with_permissions(Some(Permissions::SEND_MESSAGES))
            .with_option("language", "french");

        SetLanguage.execute(&state, &interaction).await?;

        assert_eq!(state.languages.get(1).await, Language::English);
        assert_eq!(
            interaction.replies()[0]["content"],
            strings(Language::English).missing_permission
        );

        Ok(())
    }

    /// Tests that the command refuses to run outside of a guild.
    #[tokio::test]
    async fn refuses_direct_messages() -> Result<(), AppError> {
        let state = test_state().await;
        let interaction = MockInteraction::new("language").in_guild(None);

        SetLanguage.execute(&state, &interaction).await?;

        assert_eq!(
            interaction.replies()[0]["content"],
            strings(Language::English).guild_only
        );

        Ok(())
    }

    /// Tests that an unknown language code is rejected without touching the store.
    #[tokio::test]
    async fn rejects_unknown_language() -> Result<(), AppError> {
        let state = test_state().await;
        let interaction = MockInteraction::new("language").with_option("language", "klingon");

        SetLanguage.execute(&state, &interaction).await?;

        assert!(GuildPreferenceRepository::new(&state.db)
            .find_by_guild_id(1)
            .await?
            .is_none());
        assert_eq!(
            interaction.replies()[0]["content"],
            strings(Language::English).language_unknown
        );

        Ok(())
    }
}
