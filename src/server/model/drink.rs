//! Domain & parameter models for drink operations

use crate::model::drink::{CreateDrinkDto, DrinkDto};

/// The drink domain model
///
/// `abv` is a fraction between 0 and 1 and `amount` is the served volume.
#[derive(Debug, Clone, PartialEq)]
pub struct Drink {
    pub id: i32,
    pub name: String,
    pub abv: f64,
    pub amount: i32,
}

impl Drink {
    pub fn from_entity(entity: entity::drink::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            abv: entity.abv,
            amount: entity.amount,
        }
    }

    /// Alcohol contained in one serving of this drink.
    pub fn alcohol_content(&self) -> f64 {
        f64::from(self.amount) * self.abv
    }

    pub fn into_dto(self) -> DrinkDto {
        DrinkDto {
            id: self.id,
            name: self.name,
            abv: self.abv,
            amount: self.amount,
        }
    }
}

/// Parameters for creating a new drink
#[derive(Debug, Clone)]
pub struct CreateDrinkParam {
    pub name: String,
    pub abv: f64,
    pub amount: i32,
}

impl From<CreateDrinkDto> for CreateDrinkParam {
    fn from(dto: CreateDrinkDto) -> Self {
        Self {
            name: dto.name,
            abv: dto.abv,
            amount: dto.amount,
        }
    }
}
