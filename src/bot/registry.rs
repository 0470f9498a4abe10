//! Command registry built from the command catalog.
//!
//! The registry is the single source of truth for which commands exist: the publisher
//! sends its definitions to Discord and the dispatcher looks up its handlers. Both see
//! the same set because both read from the one registry built at startup.

use std::collections::HashMap;
use std::sync::Arc;

use dioxus_logger::tracing;
use serenity::all::CreateCommand;

use crate::{
    bot::command::{CommandCategory, CommandHandler, CommandModule},
    error::{registry::RegistryError, AppError},
};

/// Name → handler lookup plus the ordered definitions to publish.
pub struct CommandRegistry {
    handlers: HashMap<String, Arc<dyn CommandHandler>>,
    /// Module path that registered each name, for duplicate reporting.
    origins: HashMap<String, &'static str>,
    definitions: Vec<CreateCommand>,
    skipped: Vec<&'static str>,
}

impl CommandRegistry {
    /// Builds the registry from every module in `categories`.
    ///
    /// Modules missing a definition or a handler, or whose definition has no name, are
    /// logged with a warning and left out. Their commands are neither published nor
    /// dispatched, and the remaining modules still load.
    ///
    /// # Returns
    /// - `Ok(CommandRegistry)` - Every well-formed module registered
    /// - `Err(AppError::RegistryErr)` - Two modules define the same command name
    pub fn load(categories: Vec<CommandCategory>) -> Result<Self, AppError> {
        let mut registry = Self {
            handlers: HashMap::new(),
            origins: HashMap::new(),
            definitions: Vec::new(),
            skipped: Vec::new(),
        };

        for category in categories {
            tracing::debug!(
                "Loading {} command module(s) from category '{}'",
                category.modules.len(),
                category.name
            );

            for module in category.modules {
                registry.register(module)?;
            }
        }

        Ok(registry)
    }

    fn register(&mut self, module: CommandModule) -> Result<(), AppError> {
        let CommandModule {
            path,
            definition,
            handler,
        } = module;

        let (Some(definition), Some(handler)) = (definition, handler) else {
            tracing::warn!(
                "The command at {} is missing a definition or a handler, skipping",
                path
            );
            self.skipped.push(path);
            return Ok(());
        };

        let Some(name) = command_name(&definition) else {
            tracing::warn!("The command at {} has a definition without a name, skipping", path);
            self.skipped.push(path);
            return Ok(());
        };

        if let Some(first) = self.origins.get(&name) {
            return Err(RegistryError::DuplicateCommand {
                name,
                first: first.to_string(),
                second: path.to_string(),
            }
            .into());
        }

        tracing::trace!("Registered command '{}' from {}", name, path);

        self.origins.insert(name.clone(), path);
        self.handlers.insert(name, handler);
        self.definitions.push(definition);

        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn CommandHandler>> {
        self.handlers.get(name).cloned()
    }

    /// Definitions in catalog order, ready for a bulk overwrite.
    pub fn definitions(&self) -> &[CreateCommand] {
        &self.definitions
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Paths of modules that were left out as malformed.
    pub fn skipped(&self) -> &[&'static str] {
        &self.skipped
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Reads the command name out of a definition.
///
/// `CreateCommand` keeps its fields private, so the name is taken from the same JSON
/// that will be sent to Discord.
fn command_name(definition: &CreateCommand) -> Option<String> {
    let json = match serde_json::to_value(definition) {
        Ok(json) => json,
        Err(e) => {
            tracing::error!("Failed to serialize command definition: {:?}", e);
            return None;
        }
    };

    json.get("name")
        .and_then(|name| name.as_str())
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
}
