//! Drink data repository for database operations
//!
//! Drinks are reference data: the repository offers no update operation.

use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::{
    data::Repository,
    model::drink::{CreateDrinkParam, Drink},
};

pub struct DrinkRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DrinkRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

impl Repository for DrinkRepository<'_> {
    type Model = Drink;
    type CreateParam = CreateDrinkParam;

    async fn create(&self, param: CreateDrinkParam) -> Result<Drink, DbErr> {
        let drink = entity::drink::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(param.name),
            abv: ActiveValue::Set(param.abv),
            amount: ActiveValue::Set(param.amount),
        }
        .insert(self.db)
        .await?;

        Ok(Drink::from_entity(drink))
    }

    async fn get(&self, id: i32) -> Result<Option<Drink>, DbErr> {
        let drink = entity::prelude::Drink::find_by_id(id).one(self.db).await?;

        Ok(drink.map(Drink::from_entity))
    }

    async fn list(&self) -> Result<Vec<Drink>, DbErr> {
        let drinks = entity::prelude::Drink::find()
            .order_by_asc(entity::drink::Column::Id)
            .all(self.db)
            .await?;

        Ok(drinks.into_iter().map(Drink::from_entity).collect())
    }

    async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Drink::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
