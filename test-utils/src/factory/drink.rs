//! Drink factory for creating test drink entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test drinks with customizable fields.
pub struct DrinkFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    abv: f64,
    amount: i32,
}

impl<'a> DrinkFactory<'a> {
    /// Creates a new DrinkFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Drink {id}"` where id is auto-incremented
    /// - abv: `0.05`
    /// - amount: `10`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Drink {}", id),
            abv: 0.05,
            amount: 10,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn abv(mut self, abv: f64) -> Self {
        self.abv = abv;
        self
    }

    pub fn amount(mut self, amount: i32) -> Self {
        self.amount = amount;
        self
    }

    /// Builds and inserts the drink entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::drink::Model)` - Created drink entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::drink::Model, DbErr> {
        entity::drink::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            abv: ActiveValue::Set(self.abv),
            amount: ActiveValue::Set(self.amount),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a drink with default values (10 units at 5% abv).
pub async fn create_drink(db: &DatabaseConnection) -> Result<entity::drink::Model, DbErr> {
    DrinkFactory::new(db).build().await
}
