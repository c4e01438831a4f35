use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Planets::Table)
                    .if_not_exists()
                    .col(pk_auto(Planets::Id))
                    .col(string_len(Planets::Name, 250))
                    .col(string_len(Planets::Description, 250))
                    .col(integer(Planets::Diameter))
                    .col(integer(Planets::RotationPeriod))
                    .col(integer(Planets::OrbitalPeriod))
                    .col(big_integer_null(Planets::Population))
                    .col(string_len(Planets::Climate, 250))
                    .col(string_len_null(Planets::Terrain, 250))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Planets::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Planets {
    Table,
    Id,
    Name,
    Description,
    Diameter,
    RotationPeriod,
    OrbitalPeriod,
    Population,
    Climate,
    Terrain,
}
