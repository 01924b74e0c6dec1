use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PatronDto {
    pub id: i32,
    pub name: String,
    pub body_mass: i32,
    pub alcohol_saturation_level: f64,
}

/// Payload for registering a new patron.
///
/// `alcohol_saturation_level` may be omitted, in which case the patron starts sober.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreatePatronDto {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters."
    ))]
    pub name: String,
    #[validate(range(min = 1, message = "Body mass must be greater than zero."))]
    pub body_mass: i32,
    #[validate(range(
        min = 0.0,
        message = "Alcohol saturation level cannot be negative."
    ))]
    #[serde(default)]
    pub alcohol_saturation_level: Option<f64>,
}

/// Template values for a new patron form. Carries no identity since nothing is stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DefaultPatronDto {
    pub name: String,
    pub body_mass: i32,
    pub alcohol_saturation_level: f64,
}
