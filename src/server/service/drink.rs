//! Drink service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{drink::DrinkRepository, Repository},
    error::AppError,
    model::drink::{CreateDrinkParam, Drink},
};

pub struct DrinkService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DrinkService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a drink to the menu.
    pub async fn create(&self, param: CreateDrinkParam) -> Result<Drink, AppError> {
        let drink = DrinkRepository::new(self.db).create(param).await?;

        tracing::info!("Added drink {} ({})", drink.id, drink.name);

        Ok(drink)
    }

    /// Retrieves a drink by ID, or `AppError::NotFound` if absent.
    pub async fn get(&self, id: i32) -> Result<Drink, AppError> {
        DrinkRepository::new(self.db)
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Drink not found".to_string()))
    }

    pub async fn list(&self) -> Result<Vec<Drink>, AppError> {
        let drinks = DrinkRepository::new(self.db).list().await?;
        Ok(drinks)
    }

    /// Deletes a drink, or returns `AppError::NotFound` if absent.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !DrinkRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Drink not found".to_string()));
        }

        tracing::info!("Deleted drink {}", id);

        Ok(())
    }
}
