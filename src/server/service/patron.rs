//! Patron service for business logic.
//!
//! This module provides the `PatronService` for registering, looking up, and removing
//! patrons, and for reading their current saturation level.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{patron::PatronRepository, Repository},
    error::AppError,
    model::patron::{CreatePatronParam, Patron, PatronDefaults, PATRON_DEFAULTS},
};

/// Service providing business logic for patron management.
pub struct PatronService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PatronService<'a> {
    /// Creates a new PatronService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new patron.
    ///
    /// # Returns
    /// - `Ok(Patron)` - The stored patron with its assigned ID
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreatePatronParam) -> Result<Patron, AppError> {
        let patron = PatronRepository::new(self.db).create(param).await?;

        tracing::info!("Registered patron {} ({})", patron.id, patron.name);

        Ok(patron)
    }

    /// Retrieves a patron by ID.
    ///
    /// # Returns
    /// - `Ok(Patron)` - The requested patron
    /// - `Err(AppError::NotFound)` - No patron with that ID exists
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get(&self, id: i32) -> Result<Patron, AppError> {
        PatronRepository::new(self.db)
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Patron not found".to_string()))
    }

    /// Retrieves every patron ordered by ID.
    pub async fn list(&self) -> Result<Vec<Patron>, AppError> {
        let patrons = PatronRepository::new(self.db).list().await?;
        Ok(patrons)
    }

    /// Returns the stored saturation level of a patron.
    ///
    /// # Returns
    /// - `Ok(f64)` - The level written by the most recent tally, or the initial value
    /// - `Err(AppError::NotFound)` - No patron with that ID exists
    pub async fn saturation_level(&self, id: i32) -> Result<f64, AppError> {
        let patron = self.get(id).await?;
        Ok(patron.alcohol_saturation_level)
    }

    /// Deletes a patron.
    ///
    /// # Returns
    /// - `Ok(())` - The patron was deleted
    /// - `Err(AppError::NotFound)` - No patron with that ID exists
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !PatronRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Patron not found".to_string()));
        }

        tracing::info!("Deleted patron {}", id);

        Ok(())
    }

    /// Template values for a new patron. Reads and writes nothing.
    pub fn defaults() -> PatronDefaults {
        PATRON_DEFAULTS
    }
}
