use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Patron::Table)
                    .if_not_exists()
                    .col(pk_auto(Patron::Id))
                    .col(string_len(Patron::Name, 255))
                    .col(integer(Patron::BodyMass))
                    .col(double(Patron::AlcoholSaturationLevel))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Patron::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Patron {
    Table,
    Id,
    Name,
    BodyMass,
    AlcoholSaturationLevel,
}
