//! Patron factory for creating test patron entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test patrons with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::patron::PatronFactory;
///
/// let patron = PatronFactory::new(&db)
///     .name("Jane")
///     .body_mass(55)
///     .build()
///     .await?;
/// ```
pub struct PatronFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    body_mass: i32,
    alcohol_saturation_level: f64,
}

impl<'a> PatronFactory<'a> {
    /// Creates a new PatronFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Patron {id}"` where id is auto-incremented
    /// - body_mass: `70`
    /// - alcohol_saturation_level: `0.0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Patron {}", id),
            body_mass: 70,
            alcohol_saturation_level: 0.0,
        }
    }

    /// Sets the patron name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the patron body mass.
    pub fn body_mass(mut self, body_mass: i32) -> Self {
        self.body_mass = body_mass;
        self
    }

    /// Sets the stored alcohol saturation level.
    pub fn alcohol_saturation_level(mut self, level: f64) -> Self {
        self.alcohol_saturation_level = level;
        self
    }

    /// Builds and inserts the patron entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::patron::Model)` - Created patron entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::patron::Model, DbErr> {
        entity::patron::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            body_mass: ActiveValue::Set(self.body_mass),
            alcohol_saturation_level: ActiveValue::Set(self.alcohol_saturation_level),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a patron with default values.
///
/// Shorthand for `PatronFactory::new(db).build().await`.
pub async fn create_patron(db: &DatabaseConnection) -> Result<entity::patron::Model, DbErr> {
    PatronFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_patron_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Patron).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let patron = create_patron(db).await?;

        assert!(patron.name.starts_with("Patron "));
        assert_eq!(patron.body_mass, 70);
        assert_eq!(patron.alcohol_saturation_level, 0.0);

        Ok(())
    }

    #[tokio::test]
    async fn creates_patron_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Patron).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let patron = PatronFactory::new(db)
            .name("Jane Doe")
            .body_mass(55)
            .alcohol_saturation_level(0.25)
            .build()
            .await?;

        assert_eq!(patron.name, "Jane Doe");
        assert_eq!(patron.body_mass, 55);
        assert_eq!(patron.alcohol_saturation_level, 0.25);

        Ok(())
    }
}
