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

pub struct Help;

pub fn module() -> CommandModule {
    CommandModule::new("general/help", register(), Help)
}

pub fn register() -> CreateCommand {
    CreateCommand::new("help").description("Show what the bot can do")
}

#[async_trait]
impl CommandHandler for Help {
    async fn execute(
        &self,
        state: &BotState,
        interaction: &dyn CommandResponder,
    ) -> Result<(), AppError> {
        let strings = strings(language_for(state, interaction).await);
        let invite_url = embed::invite_url(state.config.application_id)?;

        let embeds = embed::onboarding_embeds(strings, strings.this_server);

        interaction
            .reply(
                CreateInteractionResponseMessage::new()
                    .embeds(embeds)
                    .components(vec![embed::invite_buttons(
                        strings,
                        &invite_url,
                        state.config.support_url.as_ref(),
                    )])
                    .ephemeral(true),
            )
            .await
    }
}
