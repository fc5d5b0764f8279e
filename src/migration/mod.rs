pub use sea_orm_migration::prelude::*;

pub(crate) mod m20240101_000001_create_tables;
pub(crate) mod m20240101_000002_create_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_tables::Migration),
            Box::new(m20240101_000002_create_indexes::Migration),
        ]
    }
}
