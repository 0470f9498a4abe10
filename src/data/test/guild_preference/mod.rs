use crate::data::guild_preference::GuildPreferenceRepository;
use crate::model::language::Language;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod find_by_guild_id;
mod get_all;
mod upsert;
