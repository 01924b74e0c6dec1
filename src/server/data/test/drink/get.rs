use super::*;

/// Tests fetching drinks by ID and listing them.
///
/// Expected: Ok(Some) for the stored drink, Ok(None) for an unknown ID
#[tokio::test]
async fn finds_stored_drink_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tally_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::drink::DrinkFactory::new(db)
        .name("Whisky")
        .abv(0.4)
        .amount(40)
        .build()
        .await?;

    let repo = DrinkRepository::new(db);
    let found = repo.get(created.id).await?.unwrap();
    let missing = repo.get(created.id + 1).await?;
    let all = repo.list().await?;

    assert_eq!(found.name, "Whisky");
    assert!((found.alcohol_content() - 16.0).abs() < 1e-9);
    assert!(missing.is_none());
    assert_eq!(all.len(), 1);

    Ok(())
}
