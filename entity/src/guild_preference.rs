//! Per-guild language preference.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "guild_preference")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Discord guild snowflake stored as a string.
    #[sea_orm(unique)]
    pub guild_id: String,
    /// Language code, e.g. `"english"`.
    pub language: String,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
