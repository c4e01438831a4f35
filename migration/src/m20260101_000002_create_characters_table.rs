use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Characters::Table)
                    .if_not_exists()
                    .col(pk_auto(Characters::Id))
                    .col(string_len(Characters::Name, 250))
                    .col(string_len(Characters::Description, 250))
                    .col(string_len_null(Characters::HairColor, 250))
                    .col(string_len_null(Characters::BirthYear, 250))
                    .col(string_len(Characters::Gender, 250))
                    .col(string_len_null(Characters::SkinColor, 250))
                    .col(string_len(Characters::EyeColor, 250))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Characters::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Characters {
    Table,
    Id,
    Name,
    Description,
    HairColor,
    BirthYear,
    Gender,
    SkinColor,
    EyeColor,
}
