use super::*;
use sea_orm::PaginatorTrait;

/// Tests upserting a preference for a guild with no stored row.
///
/// Expected: Ok with one row created holding the language code
#[tokio::test]
async fn creates_new_preference() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_preference_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildPreferenceRepository::new(db);
    let stored = repo.upsert(123456789, Language::English).await?;

    assert_eq!(stored.guild_id, 123456789);
    assert_eq!(stored.language, Language::English);

    let row = entity::prelude::GuildPreference::find()
        .filter(entity::guild_preference::Column::GuildId.eq("123456789"))
        .one(db)
        .await?
        .unwrap();
    assert_eq!(row.language, "english");

    Ok(())
}

/// Tests upserting overwrites the language of an existing row.
///
/// Expected: Ok with the language updated and no duplicate row
#[tokio::test]
async fn overwrites_existing_preference() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_preference_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_preference::GuildPreferenceFactory::new(db)
        .guild_id("123456789")
        .language("french")
        .build()
        .await?;

    let repo = GuildPreferenceRepository::new(db);
    let stored = repo.upsert(123456789, Language::English).await?;

    assert_eq!(stored.language, Language::English);

    let count = entity::prelude::GuildPreference::find()
        .filter(entity::guild_preference::Column::GuildId.eq("123456789"))
        .count(db)
        .await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests upserting the same value twice keeps a single row.
///
/// Expected: Ok with one row
#[tokio::test]
async fn repeated_upsert_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_preference_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildPreferenceRepository::new(db);
    repo.upsert(42, Language::French).await?;
    repo.upsert(42, Language::French).await?;

    let count = entity::prelude::GuildPreference::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests upserting preferences for several guilds.
///
/// Expected: Ok with one row per guild
#[tokio::test]
async fn upserts_multiple_guilds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_preference_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildPreferenceRepository::new(db);
    repo.upsert(111111111, Language::English).await?;
    repo.upsert(222222222, Language::French).await?;
    repo.upsert(333333333, Language::English).await?;

    let count = entity::prelude::GuildPreference::find().count(db).await?;
    assert_eq!(count, 3);

    Ok(())
}
