use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DrinkDto {
    pub id: i32,
    pub name: String,
    pub abv: f64,
    pub amount: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateDrinkDto {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters."
    ))]
    pub name: String,
    /// Alcohol by volume as a fraction, e.g. `0.05` for 5%.
    #[validate(range(min = 0.0, max = 1.0, message = "ABV must be between 0 and 1."))]
    pub abv: f64,
    #[validate(range(min = 1, message = "Amount must be greater than zero."))]
    pub amount: i32,
}
