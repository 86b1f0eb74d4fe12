//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_country;
mod m20240101_000002_create_zone;
mod m20240101_000003_create_service_center;
mod m20240101_000004_create_product;
mod m20240101_000005_create_product_type;
mod m20240101_000006_create_gauge;
mod m20240101_000007_create_color;
mod m20240101_000008_create_user;
mod m20240101_000009_create_user_country;
mod m20240101_000010_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_country::Migration),
            Box::new(m20240101_000002_create_zone::Migration),
            Box::new(m20240101_000003_create_service_center::Migration),
            Box::new(m20240101_000004_create_product::Migration),
            Box::new(m20240101_000005_create_product_type::Migration),
            Box::new(m20240101_000006_create_gauge::Migration),
            Box::new(m20240101_000007_create_color::Migration),
            Box::new(m20240101_000008_create_user::Migration),
            Box::new(m20240101_000009_create_user_country::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000010_add_indexes::Migration),
        ]
    }
}
