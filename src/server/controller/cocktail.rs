use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::api::ErrorDto,
    server::{error::AppError, service::cocktail::CocktailService, state::AppState},
};

/// Tag for grouping cocktail API endpoints in OpenAPI documentation
pub static COCKTAIL_TAG: &str = "cocktail";

/// Get saturation levels for cocktails matching a name.
///
/// Searches the cocktail API and returns, for every match, the saturation level one
/// serving would produce in a patron of default body mass.
///
/// # Arguments
/// - `state` - Application state containing the HTTP client and cocktail API URL
/// - `name` - Cocktail name to search for
///
/// # Returns
/// - `200 OK` - One saturation level per matched cocktail, empty if none matched
/// - `502 Bad Gateway` - The API was unreachable or returned an unusable drink
/// - Other - The status code returned by the cocktail API
#[utoipa::path(
    get,
    path = "/api/alcohol-saturation-levels/{name}/",
    tag = COCKTAIL_TAG,
    params(
        ("name" = String, Path, description = "Cocktail name")
    ),
    responses(
        (status = 200, description = "Saturation level per matched cocktail", body = Vec<f64>),
        (status = 502, description = "Cocktail API unreachable or returned malformed data", body = ErrorDto),
        (status = "default", description = "Upstream status propagated", body = ErrorDto)
    ),
)]
pub async fn get_alcohol_saturation_levels(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let levels = CocktailService::new(&state.http_client, &state.cocktail_search_url)
        .saturation_levels(&name)
        .await?;

    Ok((StatusCode::OK, Json(levels)))
}
