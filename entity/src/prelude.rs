pub use super::guild_preference::Entity as GuildPreference;
