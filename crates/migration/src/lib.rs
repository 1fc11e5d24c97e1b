//! Migrator registering the dashboard collections in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_customer;
mod m20240101_000002_create_location;
mod m20240101_000003_create_service_category;
mod m20240101_000004_add_listing_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_customer::Migration),
            Box::new(m20240101_000002_create_location::Migration),
            Box::new(m20240101_000003_create_service_category::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000004_add_listing_indexes::Migration),
        ]
    }
}
