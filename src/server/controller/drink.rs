use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        drink::{CreateDrinkDto, DrinkDto},
    },
    server::{
        error::AppError, model::drink::CreateDrinkParam, service::drink::DrinkService,
        state::AppState,
    },
};

/// Tag for grouping drink endpoints in OpenAPI documentation
pub static DRINK_TAG: &str = "drink";

/// Add a drink to the menu.
///
/// # Returns
/// - `201 Created` - The stored drink
/// - `400 Bad Request` - Malformed JSON or a field failed validation
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/drinks/",
    tag = DRINK_TAG,
    request_body = CreateDrinkDto,
    responses(
        (status = 201, description = "Successfully created drink", body = DrinkDto),
        (status = 400, description = "Invalid drink data", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_drink(
    State(state): State<AppState>,
    payload: Result<Json<CreateDrinkDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let drink = DrinkService::new(&state.db)
        .create(CreateDrinkParam::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(drink.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/drinks/",
    tag = DRINK_TAG,
    responses(
        (status = 200, description = "All drinks ordered by ID", body = Vec<DrinkDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_drinks(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let drinks = DrinkService::new(&state.db).list().await?;

    let dtos: Vec<DrinkDto> = drinks.into_iter().map(|d| d.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/drinks/{drink_id}/",
    tag = DRINK_TAG,
    params(
        ("drink_id" = i32, Path, description = "Drink ID")
    ),
    responses(
        (status = 200, description = "The requested drink", body = DrinkDto),
        (status = 404, description = "Drink not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_drink(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(drink_id) = path?;
    let drink = DrinkService::new(&state.db).get(drink_id).await?;

    Ok((StatusCode::OK, Json(drink.into_dto())))
}

/// Remove a drink from the menu.
#[utoipa::path(
    delete,
    path = "/api/drinks/{drink_id}/",
    tag = DRINK_TAG,
    params(
        ("drink_id" = i32, Path, description = "Drink ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted drink"),
        (status = 404, description = "Drink not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_drink(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(drink_id) = path?;
    DrinkService::new(&state.db).delete(drink_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
