use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Listings sort by (created_at desc, id desc)
        manager
            .create_index(
                Index::create()
                    .name("idx_customer_created")
                    .table(Customer::Table)
                    .col(Customer::CreatedAt)
                    .col(Customer::Id)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_location_created")
                    .table(Location::Table)
                    .col(Location::CreatedAt)
                    .col(Location::Id)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_service_category_created")
                    .table(ServiceCategory::Table)
                    .col(ServiceCategory::CreatedAt)
                    .col(ServiceCategory::Id)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_customer_created").table(Customer::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_location_created").table(Location::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_service_category_created").table(ServiceCategory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Customer { Table, Id, CreatedAt }

#[derive(DeriveIden)]
enum Location { Table, Id, CreatedAt }

#[derive(DeriveIden)]
enum ServiceCategory { Table, Id, CreatedAt }
