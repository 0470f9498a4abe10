//! Publishing slash command definitions to Discord.
//!
//! Definitions are sent with a single bulk overwrite, which replaces every command the
//! application had in that scope. Commands removed from the catalog therefore disappear
//! from Discord on the next start.

use dioxus_logger::tracing;
use serenity::all::{Command, CreateCommand, GuildId, Http};
use serenity::async_trait;

use crate::error::AppError;

/// Where commands are registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishScope {
    /// A single guild. Changes are visible immediately, used while developing.
    Guild(GuildId),
    /// Every guild the bot is in.
    Global,
}

/// Remote side of a bulk command overwrite.
#[async_trait]
pub trait CommandSink: Send + Sync {
    /// Replaces all commands in `scope` and returns how many Discord now reports.
    async fn replace_commands(
        &self,
        scope: PublishScope,
        definitions: Vec<CreateCommand>,
    ) -> Result<usize, AppError>;
}

#[async_trait]
impl CommandSink for Http {
    async fn replace_commands(
        &self,
        scope: PublishScope,
        definitions: Vec<CreateCommand>,
    ) -> Result<usize, AppError> {
        let commands = match scope {
            PublishScope::Guild(guild_id) => guild_id.set_commands(self, definitions).await?,
            PublishScope::Global => Command::set_global_commands(self, definitions).await?,
        };

        Ok(commands.len())
    }
}

/// Publishes `definitions` to `scope`.
///
/// A failure is logged and swallowed: the bot keeps running with whatever commands
/// Discord already knows.
///
/// # Returns
/// - `Some(usize)` - Number of commands Discord confirmed
/// - `None` - The overwrite failed
pub async fn publish_commands(
    sink: &dyn CommandSink,
    scope: PublishScope,
    definitions: &[CreateCommand],
) -> Option<usize> {
    tracing::info!(
        "Started refreshing {} application (/) commands.",
        definitions.len()
    );

    match sink.replace_commands(scope, definitions.to_vec()).await {
        Ok(count) => {
            tracing::info!(
                "Successfully reloaded {} application (/) commands ({:?}).",
                count,
                scope
            );
            Some(count)
        }
        Err(e) => {
            tracing::error!("Failed to publish application commands: {:?}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Sink recording every call, optionally failing.
    #[derive(Default)]
    struct RecordingSink {
        calls: Mutex<Vec<(PublishScope, usize)>>,
        fail: bool,
    }

    #[async_trait]
    impl CommandSink for RecordingSink {
        async fn replace_commands(
            &self,
            scope: PublishScope,
            definitions: Vec<CreateCommand>,
        ) -> Result<usize, AppError> {
            self.calls.lock().unwrap().push((scope, definitions.len()));
            if self.fail {
                return Err(AppError::InternalError("remote rejected".to_string()));
            }
            Ok(definitions.len())
        }
    }

    fn definitions() -> Vec<CreateCommand> {
        vec![
            CreateCommand::new("ping").description("Ping"),
            CreateCommand::new("help").description("Help"),
        ]
    }

    /// Tests that the whole list goes out in one call to the test guild.
    ///
    /// Expected: Some(2) with a single guild-scoped call
    #[tokio::test]
    async fn publishes_all_definitions_in_one_call() {
        let sink = RecordingSink::default();
        let scope = PublishScope::Guild(GuildId::new(42));

        let count = publish_commands(&sink, scope, &definitions()).await;

        assert_eq!(count, Some(2));
        assert_eq!(*sink.calls.lock().unwrap(), vec![(scope, 2)]);
    }

    /// Tests that an empty catalog still overwrites remote commands.
    #[tokio::test]
    async fn publishes_empty_list() {
        let sink = RecordingSink::default();

        let count = publish_commands(&sink, PublishScope::Global, &[]).await;

        assert_eq!(count, Some(0));
        assert_eq!(sink.calls.lock().unwrap().len(), 1);
    }

    /// Tests that a remote failure is swallowed.
    ///
    /// Expected: None without panicking
    #[tokio::test]
    async fn swallows_remote_failure() {
        let sink = RecordingSink {
            fail: true,
            ..Default::default()
        };

        let count = publish_commands(&sink, PublishScope::Global, &definitions()).await;

        assert_eq!(count, None);
        assert_eq!(sink.calls.lock().unwrap().len(), 1);
    }
}
