use super::*;

/// Tests saving a modified patron.
///
/// Verifies that the new saturation level is written to the database.
///
/// Expected: Ok with updated patron persisted
#[tokio::test]
async fn saves_updated_saturation_level() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tally_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_patron(db).await?;
    let repo = PatronRepository::new(db);

    let mut patron = repo.get(created.id).await?.unwrap();
    patron.alcohol_saturation_level = 0.5;
    let saved = repo.save(&patron).await?;

    assert_eq!(saved.alcohol_saturation_level, 0.5);

    let stored = entity::prelude::Patron::find_by_id(created.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.alcohol_saturation_level, 0.5);
    assert_eq!(stored.name, created.name);

    Ok(())
}

/// Tests saving a patron that was never stored.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_to_save_missing_patron() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tally_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ghost = crate::server::model::patron::Patron {
        id: 404,
        name: "Ghost".to_string(),
        body_mass: 70,
        alcohol_saturation_level: 0.1,
    };

    let result = PatronRepository::new(db).save(&ghost).await;

    assert!(result.is_err());

    Ok(())
}
