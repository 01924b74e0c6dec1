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
        patron::{CreatePatronDto, DefaultPatronDto, PatronDto},
        saturation::SaturationLevelDto,
    },
    server::{
        error::AppError,
        model::patron::CreatePatronParam,
        service::{patron::PatronService, tally::TallyService},
        state::AppState,
    },
};

/// Tag for grouping patron endpoints in OpenAPI documentation
pub static PATRON_TAG: &str = "patron";

/// Register a new patron.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Patron name, body mass and optional starting saturation level
///
/// # Returns
/// - `201 Created` - The stored patron
/// - `400 Bad Request` - Malformed JSON or a field failed validation
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/patrons/",
    tag = PATRON_TAG,
    request_body = CreatePatronDto,
    responses(
        (status = 201, description = "Successfully registered patron", body = PatronDto),
        (status = 400, description = "Invalid patron data", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_patron(
    State(state): State<AppState>,
    payload: Result<Json<CreatePatronDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let patron = PatronService::new(&state.db)
        .create(CreatePatronParam::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(patron.into_dto())))
}

/// List every registered patron.
#[utoipa::path(
    get,
    path = "/api/patrons/",
    tag = PATRON_TAG,
    responses(
        (status = 200, description = "All patrons ordered by ID", body = Vec<PatronDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_patrons(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let patrons = PatronService::new(&state.db).list().await?;

    let dtos: Vec<PatronDto> = patrons.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a single patron by ID.
#[utoipa::path(
    get,
    path = "/api/patrons/{patron_id}/",
    tag = PATRON_TAG,
    params(
        ("patron_id" = i32, Path, description = "Patron ID")
    ),
    responses(
        (status = 200, description = "The requested patron", body = PatronDto),
        (status = 404, description = "Patron not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_patron(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(patron_id) = path?;
    let patron = PatronService::new(&state.db).get(patron_id).await?;

    Ok((StatusCode::OK, Json(patron.into_dto())))
}

/// Delete a patron.
///
/// # Returns
/// - `204 No Content` - The patron was deleted
/// - `404 Not Found` - No patron with that ID exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/patrons/{patron_id}/",
    tag = PATRON_TAG,
    params(
        ("patron_id" = i32, Path, description = "Patron ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted patron"),
        (status = 404, description = "Patron not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_patron(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(patron_id) = path?;
    PatronService::new(&state.db).delete(patron_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Log a drink for a patron.
///
/// Computes the saturation level for one serving of the drink and stores it as the
/// patron's current level, replacing the previous value.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `patron_id` - ID of the patron consuming the drink
/// - `drink_id` - ID of the drink consumed
///
/// # Returns
/// - `200 OK` - The patron's new saturation level
/// - `404 Not Found` - The patron or the drink does not exist
/// - `500 Internal Server Error` - Database error or a stored patron with invalid body mass
#[utoipa::path(
    post,
    path = "/api/patrons/{patron_id}/add-drink/{drink_id}/",
    tag = PATRON_TAG,
    params(
        ("patron_id" = i32, Path, description = "Patron ID"),
        ("drink_id" = i32, Path, description = "Drink ID")
    ),
    responses(
        (status = 200, description = "Drink applied to the patron's tally", body = SaturationLevelDto),
        (status = 404, description = "Patron or drink not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_drink(
    State(state): State<AppState>,
    path: Result<Path<(i32, i32)>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path((patron_id, drink_id)) = path?;
    let patron = TallyService::new(&state.db)
        .add_drink(patron_id, drink_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(SaturationLevelDto {
            alcohol_saturation_level: patron.alcohol_saturation_level,
        }),
    ))
}

/// Get a patron's current saturation level.
#[utoipa::path(
    get,
    path = "/api/patrons/{patron_id}/saturation-level/",
    tag = PATRON_TAG,
    params(
        ("patron_id" = i32, Path, description = "Patron ID")
    ),
    responses(
        (status = 200, description = "The patron's stored saturation level", body = SaturationLevelDto),
        (status = 404, description = "Patron not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_saturation_level(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(patron_id) = path?;
    let alcohol_saturation_level = PatronService::new(&state.db)
        .saturation_level(patron_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(SaturationLevelDto {
            alcohol_saturation_level,
        }),
    ))
}

/// Get template values for a new patron.
///
/// Always returns the same object. Any request body is ignored and nothing is stored.
#[utoipa::path(
    post,
    path = "/api/patrons/add-default-values/",
    tag = PATRON_TAG,
    responses(
        (status = 200, description = "Default patron values", body = DefaultPatronDto)
    ),
)]
pub async fn add_default_values() -> impl IntoResponse {
    (StatusCode::OK, Json(PatronService::defaults().into_dto()))
}
