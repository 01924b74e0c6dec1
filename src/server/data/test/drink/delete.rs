use super::*;

/// Tests deleting drinks.
///
/// Expected: Ok(true) for an existing drink, Ok(false) on repeat deletion
#[tokio::test]
async fn deletes_drink_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tally_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_drink(db).await?;
    let repo = DrinkRepository::new(db);

    assert!(repo.delete(created.id).await?);
    assert!(!repo.delete(created.id).await?);

    Ok(())
}
