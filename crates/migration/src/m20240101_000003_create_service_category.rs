//! Create `service_category` table.
//!
//! Prices are stored in cents to avoid float rounding.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceCategory::Table)
                    .if_not_exists()
                    .col(uuid(ServiceCategory::Id).primary_key())
                    .col(string_len(ServiceCategory::Name, 128).not_null())
                    .col(text_null(ServiceCategory::Description))
                    .col(big_integer(ServiceCategory::PriceCents).not_null())
                    .col(boolean(ServiceCategory::Active).not_null().default(true))
                    .col(timestamp_with_time_zone(ServiceCategory::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ServiceCategory::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ServiceCategory { Table, Id, Name, Description, PriceCents, Active, CreatedAt }
