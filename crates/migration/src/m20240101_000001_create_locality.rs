//! Create `locality` table.
//!
//! `zip_code` carries a unique constraint so concurrent inserts of the same
//! postal code cannot both succeed.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Locality::Table)
                    .if_not_exists()
                    .col(pk_auto(Locality::Id))
                    .col(string_len(Locality::ZipCode, 32).unique_key())
                    .col(string_len(Locality::LocalityName, 128))
                    .col(string_len(Locality::ProvinceName, 128))
                    .col(string_len(Locality::CountryName, 128))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Locality::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Locality { Table, Id, ZipCode, LocalityName, ProvinceName, CountryName }
