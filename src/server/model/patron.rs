//! Domain & parameter models for patron operations
//!
//! Defines the patron domain model, its creation parameters, and the constant default
//! record, along with conversions from entity models and into DTOs.

use crate::model::patron::{CreatePatronDto, DefaultPatronDto, PatronDto};

/// The patron domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Patron {
    pub id: i32,
    pub name: String,
    pub body_mass: i32,
    pub alcohol_saturation_level: f64,
}

impl Patron {
    /// Converts an entity model to the patron domain model
    pub fn from_entity(entity: entity::patron::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            body_mass: entity.body_mass,
            alcohol_saturation_level: entity.alcohol_saturation_level,
        }
    }

    pub fn into_dto(self) -> PatronDto {
        PatronDto {
            id: self.id,
            name: self.name,
            body_mass: self.body_mass,
            alcohol_saturation_level: self.alcohol_saturation_level,
        }
    }
}

/// Parameters for registering a new patron
#[derive(Debug, Clone)]
pub struct CreatePatronParam {
    pub name: String,
    pub body_mass: i32,
    pub alcohol_saturation_level: f64,
}

impl From<CreatePatronDto> for CreatePatronParam {
    fn from(dto: CreatePatronDto) -> Self {
        Self {
            name: dto.name,
            body_mass: dto.body_mass,
            alcohol_saturation_level: dto.alcohol_saturation_level.unwrap_or(0.0),
        }
    }
}

/// Template values offered to clients registering a new patron
///
/// Returned verbatim by the add-default-values endpoint; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct PatronDefaults {
    pub name: &'static str,
    pub body_mass: i32,
    pub alcohol_saturation_level: f64,
}

pub const PATRON_DEFAULTS: PatronDefaults = PatronDefaults {
    name: "Default Patron",
    body_mass: 70,
    alcohol_saturation_level: 0.0,
};

impl PatronDefaults {
    pub fn into_dto(self) -> DefaultPatronDto {
        DefaultPatronDto {
            name: self.name.to_string(),
            body_mass: self.body_mass,
            alcohol_saturation_level: self.alcohol_saturation_level,
        }
    }
}
