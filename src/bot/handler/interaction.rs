//! Interaction handler.
//!
//! Slash commands go to the dispatcher and message components to the component router.
//! Autocomplete and modal submissions are not used by any command and are dropped.

use dioxus_logger::tracing;
use serenity::all::{Context, Interaction};

use crate::bot::{component::ComponentRouter, dispatch::Dispatcher, interaction::SlashCommand};

pub async fn handle_interaction_create(
    dispatcher: &Dispatcher,
    components: &ComponentRouter,
    ctx: Context,
    interaction: Interaction,
) {
    match interaction {
        Interaction::Command(command) => {
            let command = SlashCommand::new(ctx.http.clone(), command);
            let outcome = dispatcher.dispatch(&command).await;
            tracing::debug!("Command interaction handled: {:?}", outcome);
        }
        Interaction::Component(component) => {
            components.route(&ctx.http, &component).await;
        }
        other => {
            tracing::trace!("Ignoring interaction of kind {:?}", other.kind());
        }
    }
}
