//! Create `seller` table.
//!
//! `cid` is unique; `localities_id` references `locality(id)` and blocks
//! deletion of a locality that still has sellers.
use sea_orm_migration::{prelude::*, schema::*};

use crate::m20240101_000001_create_locality::Locality;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Seller::Table)
                    .if_not_exists()
                    .col(pk_auto(Seller::Id))
                    .col(integer(Seller::Cid).unique_key())
                    .col(string_len(Seller::CompanyName, 128))
                    .col(string_len(Seller::Address, 255))
                    .col(string_len(Seller::Telephone, 64))
                    .col(integer(Seller::LocalitiesId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_seller_locality")
                            .from(Seller::Table, Seller::LocalitiesId)
                            .to(Locality::Table, Locality::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Seller::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Seller { Table, Id, Cid, CompanyName, Address, Telephone, LocalitiesId }
