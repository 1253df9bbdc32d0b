use sea_orm::{ConnectOptions, Database};
use sea_orm_migration::MigratorTrait as _;

use huddle_domain::session::SessionKind;
use huddle_sessions::domain::repository::{NewUser, SessionRepository as _, UserRepository as _};
use huddle_sessions::domain::types::{Session, User};
use huddle_sessions::state::AppState;
use huddle_sessions_migration::Migrator;

/// Fresh in-memory database with the full schema applied.
///
/// The pool is pinned to a single connection: every pooled connection gets
/// its own `:memory:` instance, so a larger pool would scatter the schema.
pub async fn setup_state() -> AppState {
    let mut options = ConnectOptions::new("sqlite::memory:".to_owned());
    options.max_connections(1);
    let db = Database::connect(options)
        .await
        .expect("connect to in-memory sqlite");
    Migrator::up(&db, None).await.expect("apply migrations");
    AppState { db }
}

pub async fn create_user(state: &AppState, email: &str) -> User {
    state
        .user_repo()
        .create(&NewUser {
            email: email.to_owned(),
            username: "jane doe".to_owned(),
            password_hash: "not-a-real-hash".to_owned(),
        })
        .await
        .expect("create user")
}

/// Creates a retro session owned by `owner`, which also enrolls the owner
/// as the first roster member.
pub async fn create_session(state: &AppState, owner: &User, title: &str) -> Session {
    state
        .session_repo()
        .create_with_owner_membership(owner.id, title, None, Some(SessionKind::Retro))
        .await
        .expect("create session")
}
