use super::*;

/// Tests listing every stored preference.
///
/// Expected: Ok with all rows, including ones with unknown language codes
#[tokio::test]
async fn returns_all_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_preference_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_guild_preference(db).await?;
    factory::create_guild_preference(db).await?;
    factory::guild_preference::GuildPreferenceFactory::new(db)
        .language("klingon")
        .build()
        .await?;

    let repo = GuildPreferenceRepository::new(db);
    let rows = repo.get_all().await?;

    assert_eq!(rows.len(), 3);

    Ok(())
}

/// Tests listing an empty table.
///
/// Expected: Ok with no rows
#[tokio::test]
async fn returns_empty_when_no_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_preference_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildPreferenceRepository::new(db);
    let rows = repo.get_all().await?;

    assert!(rows.is_empty());

    Ok(())
}
