use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildPreference::Table)
                    .if_not_exists()
                    .col(pk_auto(GuildPreference::Id))
                    .col(string_uniq(GuildPreference::GuildId))
                    .col(string(GuildPreference::Language))
                    .col(
                        timestamp_with_time_zone(GuildPreference::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildPreference::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum GuildPreference {
    Table,
    Id,
    GuildId,
    Language,
    UpdatedAt,
}
