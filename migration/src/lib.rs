pub use sea_orm_migration::prelude::*;

mod m20251101_000001_create_sources;
mod m20251101_000002_create_logs_runs;
mod m20251101_000003_seed_sources;

pub use m20251101_000003_seed_sources::SEED_SOURCES;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_create_sources::Migration),
            Box::new(m20251101_000002_create_logs_runs::Migration),
            Box::new(m20251101_000003_seed_sources::Migration),
        ]
    }
}
