//! Migrator registering entity-specific migrations in dependency order.
//! The pair table comes last because it references both entity tables.
pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_producto;
mod m20240301_000002_create_tienda;
mod m20240301_000003_create_producto_tienda;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_producto::Migration),
            Box::new(m20240301_000002_create_tienda::Migration),
            Box::new(m20240301_000003_create_producto_tienda::Migration),
        ]
    }
}
