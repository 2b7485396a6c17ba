pub use sea_orm_migration::prelude::*;

pub mod labels;

mod m20251019_000001_create_table_messages;
mod m20251019_000002_create_table_abouts;
mod m20251019_000003_create_table_skills;
mod m20251019_000004_create_table_certifications;
mod m20251019_000005_create_table_experiences;
mod m20251019_000006_create_table_projects;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251019_000001_create_table_messages::Migration),
            Box::new(m20251019_000002_create_table_abouts::Migration),
            Box::new(m20251019_000003_create_table_skills::Migration),
            Box::new(m20251019_000004_create_table_certifications::Migration),
            Box::new(m20251019_000005_create_table_experiences::Migration),
            Box::new(m20251019_000006_create_table_projects::Migration),
        ]
    }
}
