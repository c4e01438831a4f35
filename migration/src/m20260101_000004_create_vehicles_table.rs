use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicles::Table)
                    .if_not_exists()
                    .col(pk_auto(Vehicles::Id))
                    .col(string_len(Vehicles::Name, 250))
                    .col(string_len(Vehicles::Description, 250))
                    .col(string_len(Vehicles::Model, 250))
                    .col(string_len(Vehicles::VehicleClass, 250))
                    .col(string_len(Vehicles::Manufacturer, 250))
                    .col(integer(Vehicles::Length))
                    .col(integer(Vehicles::Crew))
                    .col(integer(Vehicles::CargoCapacity))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vehicles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Vehicles {
    Table,
    Id,
    Name,
    Description,
    Model,
    VehicleClass,
    Manufacturer,
    Length,
    Crew,
    CargoCapacity,
}
