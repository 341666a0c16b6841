//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20220101_000001_create_customer;
mod m20220101_000002_create_product;
mod m20220101_000003_create_order;
mod m20220101_000004_create_order_product;
mod m20220101_000005_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20220101_000001_create_customer::Migration),
            Box::new(m20220101_000002_create_product::Migration),
            Box::new(m20220101_000003_create_order::Migration),
            Box::new(m20220101_000004_create_order_product::Migration),
            // Indexes should always be applied last
            Box::new(m20220101_000005_add_indexes::Migration),
        ]
    }
}
