//! Routing slash commands to their handlers.

use std::sync::Arc;

use dioxus_logger::tracing;
use serenity::all::{
    CommandType, CreateInteractionResponseFollowup, CreateInteractionResponseMessage,
};

use crate::{
    bot::{interaction::CommandResponder, registry::CommandRegistry},
    state::BotState,
};

/// Shown to the user when a command handler fails.
pub const GENERIC_FAILURE: &str = "There was an error while executing this command!";

/// What happened to one interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Not a chat input command.
    Ignored,
    /// No handler is registered under the command name.
    UnknownCommand,
    Completed,
    /// The handler failed. `notified` is how the user was told, if at all.
    Failed { notified: Option<FailureNotice> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureNotice {
    Reply,
    FollowUp,
}

pub struct Dispatcher {
    registry: Arc<CommandRegistry>,
    state: BotState,
}

impl Dispatcher {
    pub fn new(registry: Arc<CommandRegistry>, state: BotState) -> Self {
        Self { registry, state }
    }

    /// Runs the handler registered for the interaction's command.
    ///
    /// Never fails: a handler error is logged and answered with [`GENERIC_FAILURE`],
    /// as a follow-up when the handler already replied or deferred and as an ephemeral
    /// reply otherwise, so the interaction always gets exactly one initial response.
    pub async fn dispatch(&self, interaction: &dyn CommandResponder) -> DispatchOutcome {
        if interaction.kind() != CommandType::ChatInput {
            return DispatchOutcome::Ignored;
        }

        let name = interaction.command_name();
        let Some(handler) = self.registry.get(name) else {
            tracing::error!("No command matching {} was found.", name);
            return DispatchOutcome::UnknownCommand;
        };

        let Err(e) = handler.execute(&self.state, interaction).await else {
            return DispatchOutcome::Completed;
        };

        tracing::error!("Failed to execute command {}: {:?}", name, e);

        let notified = if interaction.is_acknowledged() {
            interaction
                .follow_up(
                    CreateInteractionResponseFollowup::new()
                        .content(GENERIC_FAILURE)
                        .ephemeral(true),
                )
                .await
                .map(|_| FailureNotice::FollowUp)
        } else {
            interaction
                .reply(
                    CreateInteractionResponseMessage::new()
                        .content(GENERIC_FAILURE)
                        .ephemeral(true),
                )
                .await
                .map(|_| FailureNotice::Reply)
        };

        match notified {
            Ok(notice) => DispatchOutcome::Failed {
                notified: Some(notice),
            },
            Err(e) => {
                tracing::error!("Failed to notify user of failed command {}: {:?}", name, e);
                DispatchOutcome::Failed { notified: None }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::{
        command::{CommandCategory, CommandHandler, CommandModule},
        interaction::mock::MockInteraction,
        test_support::test_state,
    };
    use crate::error::AppError;
    use serenity::all::CreateCommand;
    use serenity::async_trait;

    /// How the fake handler behaves before failing or succeeding.
    enum Script {
        Pong,
        Fail,
        DeferThenFail,
        ReplyThenFail,
    }

    struct Scripted(Script);

    #[async_trait]
    impl CommandHandler for Scripted {
        async fn execute(
            &self,
            _state: &BotState,
            interaction: &dyn CommandResponder,
        ) -> Result<(), AppError> {
            match self.0 {
                Script::Pong => {
                    interaction
                        .reply(CreateInteractionResponseMessage::new().content("Pong!"))
                        .await
                }
                Script::Fail => Err(AppError::InternalError("boom".to_string())),
                Script::DeferThenFail => {
                    interaction.defer(false).await?;
                    Err(AppError::InternalError("boom".to_string()))
                }
                Script::ReplyThenFail => {
                    interaction
                        .reply(CreateInteractionResponseMessage::new().content("partial"))
                        .await?;
                    Err(AppError::InternalError("boom".to_string()))
                }
            }
        }
    }

    async fn dispatcher() -> Dispatcher {
        let module = |name: &'static str, script| {
            CommandModule::new(
                name,
                CreateCommand::new(name).description("test"),
                Scripted(script),
            )
        };
        let registry = CommandRegistry::load(vec![CommandCategory {
            name: "test",
            modules: vec![
                module("ping", Script::Pong),
                module("fail", Script::Fail),
                module("defer-fail", Script::DeferThenFail),
                module("reply-fail", Script::ReplyThenFail),
            ],
        }])
        .unwrap();

        Dispatcher::new(Arc::new(registry), test_state().await)
    }

    /// Tests that a registered command runs its handler.
    ///
    /// Expected: Completed with the handler's single reply
    #[tokio::test]
    async fn runs_matching_handler() {
        let dispatcher = dispatcher().await;
        let interaction = MockInteraction::new("ping");

        let outcome = dispatcher.dispatch(&interaction).await;

        assert_eq!(outcome, DispatchOutcome::Completed);
        assert_eq!(interaction.replies()[0]["content"], "Pong!");
        assert_eq!(interaction.response_count(), 1);
    }

    /// Tests that context menu commands are ignored.
    ///
    /// Expected: Ignored with no response
    #[tokio::test]
    async fn ignores_non_chat_input() {
        let dispatcher = dispatcher().await;
        let interaction = MockInteraction::new("ping").with_kind(CommandType::User);

        let outcome = dispatcher.dispatch(&interaction).await;

        assert_eq!(outcome, DispatchOutcome::Ignored);
        assert_eq!(interaction.response_count(), 0);
    }

    /// Tests that an unknown command gets no response and does not affect later dispatches.
    ///
    /// Expected: UnknownCommand, then Completed for the next interaction
    #[tokio::test]
    async fn unknown_command_is_not_answered() {
        let dispatcher = dispatcher().await;
        let unknown = MockInteraction::new("pong");

        assert_eq!(
            dispatcher.dispatch(&unknown).await,
            DispatchOutcome::UnknownCommand
        );
        assert_eq!(unknown.response_count(), 0);

        let next = MockInteraction::new("ping");
        assert_eq!(dispatcher.dispatch(&next).await, DispatchOutcome::Completed);
    }

    /// Tests that a failure before any response is answered with an ephemeral reply.
    ///
    /// Expected: Failed with Reply and exactly one response
    #[tokio::test]
    async fn failure_before_response_replies() {
        let dispatcher = dispatcher().await;
        let interaction = MockInteraction::new("fail");

        let outcome = dispatcher.dispatch(&interaction).await;

        assert_eq!(
            outcome,
            DispatchOutcome::Failed {
                notified: Some(FailureNotice::Reply)
            }
        );
        let replies = interaction.replies();
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0]["content"], GENERIC_FAILURE);
        assert_eq!(replies[0]["flags"], 64);
        assert!(interaction.follow_ups().is_empty());
    }

    /// Tests that a failure after a defer is answered with a follow-up.
    ///
    /// Expected: Failed with FollowUp and no extra reply
    #[tokio::test]
    async fn failure_after_defer_follows_up() {
        let dispatcher = dispatcher().await;
        let interaction = MockInteraction::new("defer-fail");

        let outcome = dispatcher.dispatch(&interaction).await;

        assert_eq!(
            outcome,
            DispatchOutcome::Failed {
                notified: Some(FailureNotice::FollowUp)
            }
        );
        assert!(interaction.replies().is_empty());
        let follow_ups = interaction.follow_ups();
        assert_eq!(follow_ups.len(), 1);
        assert_eq!(follow_ups[0]["content"], GENERIC_FAILURE);
    }

    /// Tests that a failure after a reply is answered with a follow-up.
    #[tokio::test]
    async fn failure_after_reply_follows_up() {
        let dispatcher = dispatcher().await;
        let interaction = MockInteraction::new("reply-fail");

        let outcome = dispatcher.dispatch(&interaction).await;

        assert_eq!(
            outcome,
            DispatchOutcome::Failed {
                notified: Some(FailureNotice::FollowUp)
            }
        );
        assert_eq!(interaction.replies().len(), 1);
        assert_eq!(interaction.follow_ups().len(), 1);
    }
}
