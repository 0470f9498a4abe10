use super::*;

/// Tests finding a stored preference.
///
/// Expected: Ok(Some) with the stored language
#[tokio::test]
async fn finds_existing_preference() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_preference_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_preference::GuildPreferenceFactory::new(db)
        .guild_id("987654321")
        .language("french")
        .build()
        .await?;

    let repo = GuildPreferenceRepository::new(db);
    let found = repo.find_by_guild_id(987654321).await?;

    assert_eq!(found.map(|p| p.language), Some(Language::French));

    Ok(())
}

/// Tests finding a guild with no stored preference.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_preference_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_guild_preference(db).await?;

    let repo = GuildPreferenceRepository::new(db);
    let found = repo.find_by_guild_id(5).await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests that an unknown stored language code surfaces as a conversion error.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn errors_on_unknown_language_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_preference_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_preference::GuildPreferenceFactory::new(db)
        .guild_id("555")
        .language("klingon")
        .build()
        .await?;

    let repo = GuildPreferenceRepository::new(db);
    let result = repo.find_by_guild_id(555).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
