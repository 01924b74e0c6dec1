use super::*;

/// Tests fetching an existing patron by ID.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn returns_existing_patron() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tally_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::patron::PatronFactory::new(db)
        .name("Regular")
        .body_mass(90)
        .alcohol_saturation_level(0.01)
        .build()
        .await?;

    let patron = PatronRepository::new(db).get(created.id).await?.unwrap();

    assert_eq!(patron.id, created.id);
    assert_eq!(patron.name, "Regular");
    assert_eq!(patron.body_mass, 90);
    assert_eq!(patron.alcohol_saturation_level, 0.01);

    Ok(())
}

/// Tests fetching a patron that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_patron() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tally_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let patron = PatronRepository::new(db).get(999).await?;

    assert!(patron.is_none());

    Ok(())
}
