use super::*;

/// Tests deleting an existing patron.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_patron_successfully() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tally_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_patron(db).await?;

    let deleted = PatronRepository::new(db).delete(created.id).await?;

    assert!(deleted);
    let count = entity::prelude::Patron::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}

/// Tests deleting a patron that does not exist.
///
/// Verifies that the missing row is reported rather than treated as success.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_patron() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tally_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let kept = factory::create_patron(db).await?;

    let deleted = PatronRepository::new(db).delete(kept.id + 100).await?;

    assert!(!deleted);
    let count = entity::prelude::Patron::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
