use super::*;

/// Tests listing patrons.
///
/// Verifies that every stored patron is returned, ordered by ID.
///
/// Expected: Ok with patrons in insertion order
#[tokio::test]
async fn lists_patrons_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tally_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_patron(db).await?;
    let second = factory::create_patron(db).await?;
    let third = factory::create_patron(db).await?;

    let patrons = PatronRepository::new(db).list().await?;

    let ids: Vec<i32> = patrons.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);

    Ok(())
}

/// Tests listing with no patrons stored.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_list_without_patrons() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tally_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let patrons = PatronRepository::new(db).list().await?;

    assert!(patrons.is_empty());

    Ok(())
}
