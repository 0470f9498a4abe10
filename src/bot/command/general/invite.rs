use serenity::all::{CreateCommand, CreateInteractionResponseMessage};
use serenity::async_trait;

use crate::{
    bot::{
        command::{language_for, CommandHandler, CommandModule},
        embed,
        interaction::CommandResponder,
        locale::strings,
    },
    error::AppError,
    state::BotState,
};

pub struct Invite;

pub fn module() -> CommandModule {
    CommandModule::new("general/invite", register(), Invite)
}

pub fn register() -> CreateCommand {
    CreateCommand::new("invite").description("Get a link to add the bot to another server")
}

#[async_trait]
impl CommandHandler for Invite {
    async fn execute(
        &self,
        state: &BotState,
        interaction: &dyn CommandResponder,
    ) -> Result<(), AppError> {
        let strings = strings(language_for(state, interaction).await);
        let invite_url = embed::invite_url(state.config.application_id)?;

        interaction
            .reply(
                CreateInteractionResponseMessage::new()
                    .content(strings.invite_message)
                    .components(vec![embed::invite_buttons(
                        strings,
                        &invite_url,
                        state.config.support_url.as_ref(),
                    )]),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::{interaction::mock::MockInteraction, test_support::test_state};

    #[tokio::test]
    async fn replies_with_invite_link() -> Result<(), AppError> {
        let state = test_state().await;
        let interaction = MockInteraction::new("invite");

        Invite.execute(&state, &interaction).await?;

        let replies = interaction.replies();
        assert_eq!(replies.len(), 1);
        let button = &replies[0]["components"][0]["components"][0];
        assert!(button["url"]
            .as_str()
            .unwrap()
            .starts_with("https://discord.com/oauth2/authorize"));

        Ok(())
    }
}
