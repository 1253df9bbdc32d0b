use sea_orm_migration::prelude::*;

mod m20260830_000001_create_users;
mod m20260830_000002_create_sessions;
mod m20260830_000003_create_session_members;
mod m20260830_000004_create_retro_action_items;
mod m20260830_000005_create_stories;
mod m20260830_000006_add_missing_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260830_000001_create_users::Migration),
            Box::new(m20260830_000002_create_sessions::Migration),
            Box::new(m20260830_000003_create_session_members::Migration),
            Box::new(m20260830_000004_create_retro_action_items::Migration),
            Box::new(m20260830_000005_create_stories::Migration),
            Box::new(m20260830_000006_add_missing_indexes::Migration),
        ]
    }
}
