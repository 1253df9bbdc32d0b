use sea_orm::Database;
use sea_orm_migration::MigratorTrait as _;
use tracing::info;

use huddle_sessions::config::SessionsConfig;
use huddle_sessions::state::AppState;
use huddle_sessions_migration::Migrator;

#[tokio::main]
async fn main() {
    huddle_core::tracing::init_tracing("huddle-sessions");

    let config = SessionsConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");
    let state = AppState { db };

    if config.migrate_on_start {
        Migrator::up(&state.db, None)
            .await
            .expect("failed to run migrations");
        info!("sessions schema is up to date");
    }

    info!("sessions storage ready");
}
