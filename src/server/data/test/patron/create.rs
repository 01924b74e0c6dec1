use super::*;

/// Tests creating a patron.
///
/// Verifies that the repository inserts the patron and returns it with an assigned ID
/// and the exact field values provided.
///
/// Expected: Ok with created patron
#[tokio::test]
async fn creates_patron_successfully() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tally_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PatronRepository::new(db);
    let patron = repo
        .create(CreatePatronParam {
            name: "John Doe".to_string(),
            body_mass: 70,
            alcohol_saturation_level: 0.0,
        })
        .await?;

    assert!(patron.id > 0);
    assert_eq!(patron.name, "John Doe");
    assert_eq!(patron.body_mass, 70);
    assert_eq!(patron.alcohol_saturation_level, 0.0);

    let stored = entity::prelude::Patron::find_by_id(patron.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.name, "John Doe");

    Ok(())
}

/// Tests creating several patrons.
///
/// Verifies that each insert receives a distinct ID.
///
/// Expected: Ok with unique IDs
#[tokio::test]
async fn assigns_unique_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tally_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PatronRepository::new(db);
    let param = CreatePatronParam {
        name: "Twin".to_string(),
        body_mass: 80,
        alcohol_saturation_level: 0.0,
    };
    let first = repo.create(param.clone()).await?;
    let second = repo.create(param).await?;

    assert_ne!(first.id, second.id);

    Ok(())
}
