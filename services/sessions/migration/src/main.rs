use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    cli::run_cli(huddle_sessions_migration::Migrator).await;
}
