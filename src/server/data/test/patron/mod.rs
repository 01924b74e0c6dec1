use crate::server::{
    data::{patron::PatronRepository, MutableRepository, Repository},
    model::patron::CreatePatronParam,
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get;
mod list;
mod save;
