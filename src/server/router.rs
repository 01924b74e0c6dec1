use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{cocktail, drink, patron},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Cocktail Tally", description = "Bar patron and drink tally API"),
    tags(
        (name = "patron", description = "Patron registration and saturation tally"),
        (name = "drink", description = "Drink menu"),
        (name = "cocktail", description = "Cocktail API lookups")
    )
)]
struct ApiDoc;

/// Builds the API router and serves its OpenAPI document through Swagger UI at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(patron::create_patron, patron::get_all_patrons))
        .routes(routes!(patron::add_default_values))
        .routes(routes!(patron::get_patron, patron::delete_patron))
        .routes(routes!(patron::add_drink))
        .routes(routes!(patron::get_saturation_level))
        .routes(routes!(drink::create_drink, drink::get_all_drinks))
        .routes(routes!(drink::get_drink, drink::delete_drink))
        .routes(routes!(cocktail::get_alcohol_saturation_levels))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
