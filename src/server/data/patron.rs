//! Patron data repository for database operations
//!
//! Provides the `PatronRepository` for managing patrons in the database and handles the
//! conversion of entity models into domain models for use within services & controllers.

use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::{
    data::{MutableRepository, Repository},
    model::patron::{CreatePatronParam, Patron},
};

/// Repository providing database operations for patron management.
pub struct PatronRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PatronRepository<'a> {
    /// Creates a new PatronRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

impl Repository for PatronRepository<'_> {
    type Model = Patron;
    type CreateParam = CreatePatronParam;

    /// Creates a new patron
    ///
    /// # Returns
    /// - `Ok(Patron)` - The created patron with its assigned ID
    /// - `Err(DbErr)` - Database error during insert operation
    async fn create(&self, param: CreatePatronParam) -> Result<Patron, DbErr> {
        let patron = entity::patron::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(param.name),
            body_mass: ActiveValue::Set(param.body_mass),
            alcohol_saturation_level: ActiveValue::Set(param.alcohol_saturation_level),
        }
        .insert(self.db)
        .await?;

        Ok(Patron::from_entity(patron))
    }

    async fn get(&self, id: i32) -> Result<Option<Patron>, DbErr> {
        let patron = entity::prelude::Patron::find_by_id(id).one(self.db).await?;

        Ok(patron.map(Patron::from_entity))
    }

    async fn list(&self) -> Result<Vec<Patron>, DbErr> {
        let patrons = entity::prelude::Patron::find()
            .order_by_asc(entity::patron::Column::Id)
            .all(self.db)
            .await?;

        Ok(patrons.into_iter().map(Patron::from_entity).collect())
    }

    async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Patron::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

impl MutableRepository for PatronRepository<'_> {
    /// Overwrites every column of an existing patron
    ///
    /// # Returns
    /// - `Ok(Patron)` - The patron as stored after the update
    /// - `Err(DbErr::RecordNotUpdated)` - No patron with that ID exists
    /// - `Err(DbErr)` - Database error during update operation
    async fn save(&self, patron: &Patron) -> Result<Patron, DbErr> {
        let updated = entity::patron::ActiveModel {
            id: ActiveValue::Unchanged(patron.id),
            name: ActiveValue::Set(patron.name.clone()),
            body_mass: ActiveValue::Set(patron.body_mass),
            alcohol_saturation_level: ActiveValue::Set(patron.alcohol_saturation_level),
        }
        .update(self.db)
        .await?;

        Ok(Patron::from_entity(updated))
    }
}
