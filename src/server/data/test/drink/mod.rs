use crate::server::{
    data::{drink::DrinkRepository, Repository},
    model::drink::CreateDrinkParam,
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get;
