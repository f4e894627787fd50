pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_keywords_table;
mod m20250601_000002_create_detected_tokens_table;
mod m20250601_000003_create_notified_tokens_table;
mod m20250601_000004_create_platform_preferences_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_keywords_table::Migration),
            Box::new(m20250601_000002_create_detected_tokens_table::Migration),
            Box::new(m20250601_000003_create_notified_tokens_table::Migration),
            Box::new(m20250601_000004_create_platform_preferences_table::Migration)
        ]
    }
}
