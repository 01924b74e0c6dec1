use axum::http::{Method, StatusCode};
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::json;
use test_utils::{
    builder::TestBuilder,
    factory::{self, drink::DrinkFactory, patron::PatronFactory},
};
use tower::ServiceExt;

use super::{app, body_json, json_request, request, UNUSED_SEARCH_URL};

/// Tests logging a drink and reading the level back.
///
/// 10 units at 5% ABV is 0.5 alcohol, and 0.5 / 70 kg is about 0.007143.
///
/// Expected: 200 from both endpoints with the same stored level
#[tokio::test]
async fn add_drink_level_is_readable_afterwards() {
    let test = TestBuilder::new().with_tally_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let patron = PatronFactory::new(db).body_mass(70).build().await.unwrap();
    let drink = DrinkFactory::new(db).abv(0.05).amount(10).build().await.unwrap();

    let response = app(db, UNUSED_SEARCH_URL)
        .oneshot(request(
            Method::POST,
            &format!("/api/patrons/{}/add-drink/{}/", patron.id, drink.id),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let added = body_json(response).await["alcohol_saturation_level"]
        .as_f64()
        .unwrap();
    assert!((added - 0.5 / 70.0).abs() < 1e-12);
    assert!((added - 0.007143).abs() < 1e-6);

    let response = app(db, UNUSED_SEARCH_URL)
        .oneshot(request(
            Method::GET,
            &format!("/api/patrons/{}/saturation-level/", patron.id),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let stored = body_json(response).await["alcohol_saturation_level"]
        .as_f64()
        .unwrap();
    assert_eq!(stored, added);
}

/// Tests logging a drink that does not exist.
///
/// Expected: 404 and the patron's level untouched
#[tokio::test]
async fn add_drink_with_unknown_drink_is_404() {
    let test = TestBuilder::new().with_tally_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let patron = PatronFactory::new(db)
        .alcohol_saturation_level(0.25)
        .build()
        .await
        .unwrap();

    let response = app(db, UNUSED_SEARCH_URL)
        .oneshot(request(
            Method::POST,
            &format!("/api/patrons/{}/add-drink/999/", patron.id),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Drink not found");

    let stored = entity::prelude::Patron::find_by_id(patron.id)
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.alcohol_saturation_level, 0.25);
}

/// Tests logging a drink for a patron that does not exist.
///
/// Expected: 404 with an error body
#[tokio::test]
async fn add_drink_with_unknown_patron_is_404() {
    let test = TestBuilder::new().with_tally_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let drink = factory::create_drink(db).await.unwrap();

    let response = app(db, UNUSED_SEARCH_URL)
        .oneshot(request(
            Method::POST,
            &format!("/api/patrons/999/add-drink/{}/", drink.id),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Patron not found");
}

/// Tests reading the level of an unknown patron.
///
/// Expected: 404
#[tokio::test]
async fn saturation_level_of_unknown_patron_is_404() {
    let test = TestBuilder::new().with_tally_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let response = app(db, UNUSED_SEARCH_URL)
        .oneshot(request(Method::GET, "/api/patrons/42/saturation-level/"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Tests registering a patron without a starting level.
///
/// Expected: 201 with the assigned ID and a level of 0.0
#[tokio::test]
async fn create_patron_returns_201() {
    let test = TestBuilder::new().with_tally_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let response = app(db, UNUSED_SEARCH_URL)
        .oneshot(json_request(
            Method::POST,
            "/api/patrons/",
            json!({ "name": "Alice", "body_mass": 60 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert!(body["id"].as_i64().unwrap() > 0);
    assert_eq!(body["name"], "Alice");
    assert_eq!(body["body_mass"], 60);
    assert_eq!(body["alcohol_saturation_level"], 0.0);
}

/// Tests registering a patron with invalid fields.
///
/// Expected: 400 listing each rejected field and nothing stored
#[tokio::test]
async fn create_patron_with_invalid_fields_is_400() {
    let test = TestBuilder::new().with_tally_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let response = app(db, UNUSED_SEARCH_URL)
        .oneshot(json_request(
            Method::POST,
            "/api/patrons/",
            json!({ "name": "", "body_mass": 0, "alcohol_saturation_level": -1.0 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["fields"]["name"].is_array());
    assert!(body["fields"]["body_mass"].is_array());
    assert!(body["fields"]["alcohol_saturation_level"].is_array());
    assert_eq!(entity::prelude::Patron::find().count(db).await.unwrap(), 0);
}

/// Tests registering a patron with a body missing a required field.
///
/// Expected: 400 with an error message
#[tokio::test]
async fn create_patron_with_missing_field_is_400() {
    let test = TestBuilder::new().with_tally_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let response = app(db, UNUSED_SEARCH_URL)
        .oneshot(json_request(
            Method::POST,
            "/api/patrons/",
            json!({ "name": "Bob" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["error"].is_string());
}

/// Tests listing and fetching patrons.
///
/// Expected: list in ID order, single lookup by ID, 404 for unknown ID
#[tokio::test]
async fn lists_and_gets_patrons() {
    let test = TestBuilder::new().with_tally_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = PatronFactory::new(db).name("First").build().await.unwrap();
    let second = PatronFactory::new(db).name("Second").build().await.unwrap();

    let response = app(db, UNUSED_SEARCH_URL)
        .oneshot(request(Method::GET, "/api/patrons/"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![i64::from(first.id), i64::from(second.id)]);

    let response = app(db, UNUSED_SEARCH_URL)
        .oneshot(request(Method::GET, &format!("/api/patrons/{}/", second.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "Second");

    let response = app(db, UNUSED_SEARCH_URL)
        .oneshot(request(Method::GET, "/api/patrons/9999/"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Tests deleting a patron that exists.
///
/// Expected: 204 and the row removed
#[tokio::test]
async fn delete_patron_returns_204() {
    let test = TestBuilder::new().with_tally_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let patron = factory::create_patron(db).await.unwrap();

    let response = app(db, UNUSED_SEARCH_URL)
        .oneshot(request(Method::DELETE, &format!("/api/patrons/{}/", patron.id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(entity::prelude::Patron::find().count(db).await.unwrap(), 0);
}

/// Tests deleting a patron that does not exist.
///
/// Expected: 404 with an error body, never success
#[tokio::test]
async fn delete_unknown_patron_is_404() {
    let test = TestBuilder::new().with_tally_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let response = app(db, UNUSED_SEARCH_URL)
        .oneshot(request(Method::DELETE, "/api/patrons/777/"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Patron not found");
}

/// Tests the default values endpoint with and without a request body.
///
/// Expected: the same literal object every time and no patron stored
#[tokio::test]
async fn default_values_are_constant_and_not_stored() {
    let test = TestBuilder::new().with_tally_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let expected = json!({
        "name": "Default Patron",
        "body_mass": 70,
        "alcohol_saturation_level": 0.0
    });

    let response = app(db, UNUSED_SEARCH_URL)
        .oneshot(request(Method::POST, "/api/patrons/add-default-values/"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, expected);

    let response = app(db, UNUSED_SEARCH_URL)
        .oneshot(json_request(
            Method::POST,
            "/api/patrons/add-default-values/",
            json!({ "name": "Someone Else", "body_mass": 120 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, expected);

    assert_eq!(entity::prelude::Patron::find().count(db).await.unwrap(), 0);
}

/// Tests requests whose patron ID is not a number.
///
/// Expected: 400 with a JSON error body
#[tokio::test]
async fn non_numeric_patron_id_is_400_with_json_error() {
    let test = TestBuilder::new().with_tally_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let response = app(db, UNUSED_SEARCH_URL)
        .oneshot(request(Method::DELETE, "/api/patrons/abc/"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["error"].is_string());

    let response = app(db, UNUSED_SEARCH_URL)
        .oneshot(request(Method::POST, "/api/patrons/1/add-drink/xyz/"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["error"].is_string());
}
