use serenity::all::{CreateCommand, CreateInteractionResponseMessage};
use serenity::async_trait;

use crate::{
    bot::{
        command::{language_for, CommandHandler, CommandModule},
        interaction::CommandResponder,
        locale::strings,
    },
    error::AppError,
    state::BotState,
};

pub struct Ping;

pub fn module() -> CommandModule {
    CommandModule::new("general/ping", register(), Ping)
}

pub fn register() -> CreateCommand {
    CreateCommand::new("ping").description("Check that the bot is responding")
}

#[async_trait]
impl CommandHandler for Ping {
    async fn execute(
        &self,
        state: &BotState,
        interaction: &dyn CommandResponder,
    ) -> Result<(), AppError> {
        let strings = strings(language_for(state, interaction).await);

        interaction
            .reply(
                CreateInteractionResponseMessage::new()
                    .content(strings.pong)
                    .ephemeral(true),
            )
            .await
    }
}
