use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbActionItemRepository, DbMemberRepository, DbSessionRepository, DbStoryRepository,
    DbUserRepository,
};

/// Shared application state: one pooled connection, cheap repository handles.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn session_repo(&self) -> DbSessionRepository {
        DbSessionRepository {
            db: self.db.clone(),
        }
    }

    pub fn member_repo(&self) -> DbMemberRepository {
        DbMemberRepository {
            db: self.db.clone(),
        }
    }

    pub fn action_item_repo(&self) -> DbActionItemRepository {
        DbActionItemRepository {
            db: self.db.clone(),
        }
    }

    pub fn story_repo(&self) -> DbStoryRepository {
        DbStoryRepository {
            db: self.db.clone(),
        }
    }
}
