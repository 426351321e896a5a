use sea_orm_migration::prelude::*;

use crate::m20240101_000002_create_seller::Seller;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Seller: lookup by locality for the per-locality report
        manager
            .create_index(
                Index::create()
                    .name("idx_seller_localities_id")
                    .table(Seller::Table)
                    .col(Seller::LocalitiesId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_seller_localities_id").table(Seller::Table).to_owned())
            .await
    }
}
