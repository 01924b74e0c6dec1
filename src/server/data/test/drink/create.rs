use super::*;

/// Tests creating a drink.
///
/// Expected: Ok with created drink and stored row
#[tokio::test]
async fn creates_drink_successfully() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tally_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let drink = DrinkRepository::new(db)
        .create(CreateDrinkParam {
            name: "Lager".to_string(),
            abv: 0.05,
            amount: 330,
        })
        .await?;

    assert!(drink.id > 0);
    assert_eq!(drink.name, "Lager");
    assert_eq!(drink.abv, 0.05);
    assert_eq!(drink.amount, 330);

    let stored = entity::prelude::Drink::find_by_id(drink.id)
        .one(db)
        .await?;
    assert!(stored.is_some());

    Ok(())
}
