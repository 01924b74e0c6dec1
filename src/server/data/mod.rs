//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//!
//! Services only depend on the capability traits below, so any storage backend
//! implementing them can stand in for SeaORM.

pub mod drink;
pub mod patron;

#[cfg(test)]
mod test;

use sea_orm::DbErr;

/// Record storage supporting creation, lookup, listing, and deletion by identity.
pub trait Repository {
    /// Domain model returned by every operation
    type Model;
    /// Caller-supplied fields for a new record
    type CreateParam;

    /// Inserts a new record and returns it with its assigned identity
    async fn create(&self, param: Self::CreateParam) -> Result<Self::Model, DbErr>;

    /// Finds a record by identity, `Ok(None)` if absent
    async fn get(&self, id: i32) -> Result<Option<Self::Model>, DbErr>;

    /// Returns every record ordered by identity
    async fn list(&self) -> Result<Vec<Self::Model>, DbErr>;

    /// Deletes a record by identity
    ///
    /// # Returns
    /// - `Ok(true)` - The record existed and was removed
    /// - `Ok(false)` - No record with that identity exists
    async fn delete(&self, id: i32) -> Result<bool, DbErr>;
}

/// Storage for records that may be rewritten after creation.
pub trait MutableRepository: Repository {
    /// Persists every field of an existing record
    async fn save(&self, model: &Self::Model) -> Result<Self::Model, DbErr>;
}
