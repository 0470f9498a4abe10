//! Embed and component builders.
//!
//! Builders here are pure: they take already-fetched values and return serenity builders,
//! so message content can be checked in tests without sending anything.

use serenity::all::{
    ApplicationId, Colour, CreateActionRow, CreateButton, CreateEmbed, CreateEmbedFooter,
    CreateSelectMenu, CreateSelectMenuKind, CreateSelectMenuOption, Permissions,
};
use url::Url;

use crate::bot::{component::LANGUAGE_SELECT, locale::Strings};
use crate::model::language::Language;

const DISCORD_AUTHORIZE_URL: &str = "https://discord.com/oauth2/authorize";

/// Colour of onboarding embeds.
const BRAND_COLOUR: Colour = Colour(0x5865f2);
const GUILD_JOINED_COLOUR: Colour = Colour(0x03fc7b);
const GUILD_LEFT_COLOUR: Colour = Colour(0xfc0303);

/// Builds the link that adds the bot to a server.
///
/// Requests the `bot` and `applications.commands` scopes with the permissions the bot
/// needs to post onboarding messages.
pub fn invite_url(application_id: ApplicationId) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(DISCORD_AUTHORIZE_URL)?;

    let permissions =
        Permissions::VIEW_CHANNEL | Permissions::SEND_MESSAGES | Permissions::EMBED_LINKS;

    url.query_pairs_mut()
        .append_pair("client_id", &application_id.get().to_string())
        .append_pair("scope", "bot applications.commands")
        .append_pair("permissions", &permissions.bits().to_string());

    Ok(url)
}

/// The six embeds posted when the bot joins a server, also shown by `/help`.
pub fn onboarding_embeds(strings: &Strings, guild_name: &str) -> Vec<CreateEmbed> {
    let section = |title: &str, description: &str| {
        CreateEmbed::new()
            .title(title)
            .description(description)
            .colour(BRAND_COLOUR)
    };

    vec![
        section(
            strings.main_title,
            &strings.main_description.replace("{guild}", guild_name),
        ),
        section(strings.test_title, strings.test_description),
        section(strings.irrverbs_title, strings.irrverbs_description),
        section(strings.study_title, strings.study_description),
        section(strings.profile_title, strings.profile_description),
        section(strings.configuration_title, strings.configuration_description),
    ]
}

/// Link buttons for inviting the bot and, when configured, joining the support server.
pub fn invite_buttons(
    strings: &Strings,
    invite_url: &Url,
    support_url: Option<&Url>,
) -> CreateActionRow {
    let mut buttons = vec![CreateButton::new_link(invite_url.as_str()).label(strings.invite_button)];

    if let Some(support_url) = support_url {
        buttons.push(CreateButton::new_link(support_url.as_str()).label(strings.support_button));
    }

    CreateActionRow::Buttons(buttons)
}

/// Select menu listing every language, with `current` preselected.
pub fn language_menu(strings: &Strings, current: Language) -> CreateActionRow {
    let options = Language::ALL
        .into_iter()
        .map(|language| {
            CreateSelectMenuOption::new(language.native_name(), language.code())
                .default_selection(language == current)
        })
        .collect();

    CreateActionRow::SelectMenu(
        CreateSelectMenu::new(LANGUAGE_SELECT, CreateSelectMenuKind::String { options })
            .placeholder(strings.language_placeholder)
            .min_values(1)
            .max_values(1),
    )
}

/// Operator notification for a newly joined server.
pub fn guild_joined_embed(
    guild_name: &str,
    owner_name: &str,
    member_count: u64,
    guild_count: usize,
) -> CreateEmbed {
    CreateEmbed::new()
        .title("New server !")
        .colour(GUILD_JOINED_COLOUR)
        .description(format!(
            "The bot was added on the `{}` server. \n Server led by : `{}`. They are **{}** members on it.",
            guild_name, owner_name, member_count
        ))
        .footer(CreateEmbedFooter::new(format!(
            "The bot is now on {} servers",
            guild_count
        )))
}

/// Operator notification for a server the bot was removed from.
pub fn guild_left_embed(
    guild_name: &str,
    owner_name: &str,
    member_count: u64,
    guild_count: usize,
) -> CreateEmbed {
    CreateEmbed::new()
        .title("Server removed !")
        .colour(GUILD_LEFT_COLOUR)
        .description(format!(
            "The bot was removed from the `{}` server. \n Server led by : `{}`. They were **{}** members on it.",
            guild_name, owner_name, member_count
        ))
        .footer(CreateEmbedFooter::new(format!(
            "The bot is now on {} servers",
            guild_count
        )))
}
