use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, SqlErr, TransactionError, TransactionTrait,
};

use huddle_domain::id::{ActionItemId, MemberId, SessionId, StoryId, UserId};
use huddle_domain::pagination::{PageRequest, Sort};
use huddle_domain::session::SessionKind;
use huddle_sessions_schema::{retro_action_items, session_members, sessions, stories, users};

use crate::domain::repository::{
    ActionItemRepository, MemberRepository, NewStory, NewUser, SessionRepository, StoryRepository,
    UserRepository,
};
use crate::domain::types::{RetroActionItem, Session, SessionMember, Story, User};
use crate::error::SessionsServiceError;

/// Map a foreign-key violation to the entity whose reference failed, going
/// by the referencing column named in the constraint.
fn fk_violation(message: &str) -> SessionsServiceError {
    if message.contains("session_id") {
        SessionsServiceError::SessionNotFound
    } else if message.contains("member_id") || message.contains("owner_id") {
        SessionsServiceError::UserNotFound
    } else {
        anyhow::anyhow!("unrecognized foreign key violation: {message}").into()
    }
}

/// Map an insert failure: unique violations become `on_unique`, foreign-key
/// violations resolve to the missing referent, anything else is internal.
fn map_insert_err(
    e: DbErr,
    on_unique: SessionsServiceError,
    ctx: &'static str,
) -> SessionsServiceError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => on_unique,
        Some(SqlErr::ForeignKeyConstraintViolation(message)) => fk_violation(&message),
        _ => anyhow::Error::new(e).context(ctx).into(),
    }
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn create(&self, user: &NewUser) -> Result<User, SessionsServiceError> {
        let result = users::ActiveModel {
            email: Set(user.email.clone()),
            username: Set(user.username.clone()),
            password_hash: Set(user.password_hash.clone()),
            is_active: Set(true),
            is_staff: Set(false),
            joined_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await;
        match result {
            Ok(model) => Ok(user_from_model(model)),
            Err(e) => Err(map_insert_err(
                e,
                SessionsServiceError::EmailAlreadyExists,
                "create user",
            )),
        }
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, SessionsServiceError> {
        let model = users::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, SessionsServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(user_from_model))
    }

    async fn update_profile(
        &self,
        id: UserId,
        username: Option<&str>,
        email: Option<&str>,
    ) -> Result<(), SessionsServiceError> {
        let mut am = users::ActiveModel {
            id: Set(id.0),
            ..Default::default()
        };
        if let Some(new_username) = username {
            am.username = Set(new_username.to_owned());
        }
        if let Some(new_email) = email {
            am.email = Set(new_email.to_owned());
        }
        match am.update(&self.db).await {
            Ok(_) => Ok(()),
            Err(DbErr::RecordNotUpdated) => Err(SessionsServiceError::UserNotFound),
            Err(e) => Err(map_insert_err(
                e,
                SessionsServiceError::EmailAlreadyExists,
                "update user profile",
            )),
        }
    }

    async fn delete(&self, id: UserId) -> Result<(), SessionsServiceError> {
        // Sessions owned by this user survive with owner nulled (SET NULL);
        // roster rows and action items block the delete (RESTRICT).
        match users::Entity::delete_by_id(id.0).exec(&self.db).await {
            Ok(res) if res.rows_affected == 0 => Err(SessionsServiceError::UserNotFound),
            Ok(_) => Ok(()),
            Err(e) => match e.sql_err() {
                Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                    Err(SessionsServiceError::UserInUse)
                }
                _ => Err(anyhow::Error::new(e).context("delete user").into()),
            },
        }
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: UserId(model.id),
        email: model.email,
        username: model.username,
        password_hash: model.password_hash,
        is_active: model.is_active,
        is_staff: model.is_staff,
        joined_at: model.joined_at,
        last_login: model.last_login,
    }
}

// ── Session repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbSessionRepository {
    pub db: DatabaseConnection,
}

impl SessionRepository for DbSessionRepository {
    async fn create_with_owner_membership(
        &self,
        owner_id: UserId,
        title: &str,
        description: Option<&str>,
        kind: Option<SessionKind>,
    ) -> Result<Session, SessionsServiceError> {
        let title = title.to_owned();
        let description = description.map(str::to_owned);
        let result = self
            .db
            .transaction::<_, sessions::Model, DbErr>(move |txn| {
                Box::pin(async move {
                    let session = sessions::ActiveModel {
                        title: Set(title),
                        description: Set(description),
                        kind: Set(kind.map(|k| k.as_code().to_owned())),
                        owner_id: Set(Some(owner_id.0)),
                        ..Default::default()
                    }
                    .insert(txn)
                    .await?;

                    let now = Utc::now();
                    session_members::ActiveModel {
                        session_id: Set(session.id),
                        member_id: Set(owner_id.0),
                        created_at: Set(now),
                        updated_at: Set(now),
                        ..Default::default()
                    }
                    .insert(txn)
                    .await?;

                    Ok(session)
                })
            })
            .await;
        match result {
            Ok(model) => session_from_model(model),
            Err(TransactionError::Transaction(e)) => Err(map_insert_err(
                e,
                SessionsServiceError::AlreadyMember,
                "create session with owner membership",
            )),
            Err(TransactionError::Connection(e)) => Err(anyhow::Error::new(e)
                .context("create session with owner membership")
                .into()),
        }
    }

    async fn find_by_id(&self, id: SessionId) -> Result<Option<Session>, SessionsServiceError> {
        let model = sessions::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find session by id")?;
        model.map(session_from_model).transpose()
    }

    async fn list_by_owner(
        &self,
        owner_id: UserId,
        sort: Sort,
        page: PageRequest,
    ) -> Result<Vec<Session>, SessionsServiceError> {
        let PageRequest { per_page, page } = page.clamped();
        let query = sessions::Entity::find().filter(sessions::Column::OwnerId.eq(owner_id.0));
        let query = match sort {
            Sort::Asc => query.order_by_asc(sessions::Column::Id),
            Sort::Desc => query.order_by_desc(sessions::Column::Id),
        };
        let models = query
            .offset(((page - 1) * per_page) as u64)
            .limit(per_page as u64)
            .all(&self.db)
            .await
            .context("list sessions by owner")?;
        models.into_iter().map(session_from_model).collect()
    }

    async fn update(
        &self,
        id: SessionId,
        title: Option<&str>,
        description: Option<&str>,
        kind: Option<SessionKind>,
    ) -> Result<(), SessionsServiceError> {
        let mut am = sessions::ActiveModel {
            id: Set(id.0),
            ..Default::default()
        };
        if let Some(new_title) = title {
            am.title = Set(new_title.to_owned());
        }
        if let Some(new_description) = description {
            am.description = Set(Some(new_description.to_owned()));
        }
        if let Some(new_kind) = kind {
            am.kind = Set(Some(new_kind.as_code().to_owned()));
        }
        match am.update(&self.db).await {
            Ok(_) => Ok(()),
            Err(DbErr::RecordNotUpdated) => Err(SessionsServiceError::SessionNotFound),
            Err(e) => Err(anyhow::Error::new(e).context("update session").into()),
        }
    }

    async fn delete_cascade(&self, id: SessionId) -> Result<(), SessionsServiceError> {
        // Roster rows and action items carry RESTRICT foreign keys, so the
        // cascade is explicit and transactional: children first, then the
        // session. Stories cascade at the storage layer.
        let result = self
            .db
            .transaction::<_, u64, DbErr>(move |txn| {
                Box::pin(async move {
                    session_members::Entity::delete_many()
                        .filter(session_members::Column::SessionId.eq(id.0))
                        .exec(txn)
                        .await?;
                    retro_action_items::Entity::delete_many()
                        .filter(retro_action_items::Column::SessionId.eq(id.0))
                        .exec(txn)
                        .await?;
                    let res = sessions::Entity::delete_by_id(id.0).exec(txn).await?;
                    Ok(res.rows_affected)
                })
            })
            .await;
        match result {
            Ok(0) => Err(SessionsServiceError::SessionNotFound),
            Ok(_) => Ok(()),
            Err(e) => Err(anyhow::Error::new(e).context("delete session cascade").into()),
        }
    }
}

fn session_from_model(model: sessions::Model) -> Result<Session, SessionsServiceError> {
    // An unknown stored code is data corruption, not a caller mistake.
    let kind = model
        .kind
        .as_deref()
        .map(|code| {
            SessionKind::from_code(code).ok_or_else(|| {
                anyhow::anyhow!("unknown session kind code {code:?} for session {}", model.id)
            })
        })
        .transpose()?;
    Ok(Session {
        id: SessionId(model.id),
        title: model.title,
        description: model.description,
        kind,
        owner_id: model.owner_id.map(UserId),
    })
}

// ── Member repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbMemberRepository {
    pub db: DatabaseConnection,
}

impl MemberRepository for DbMemberRepository {
    async fn add(
        &self,
        session_id: SessionId,
        member_id: UserId,
    ) -> Result<SessionMember, SessionsServiceError> {
        let now = Utc::now();
        let result = session_members::ActiveModel {
            session_id: Set(session_id.0),
            member_id: Set(member_id.0),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await;
        match result {
            Ok(model) => Ok(member_from_model(model)),
            Err(e) => Err(map_insert_err(
                e,
                SessionsServiceError::AlreadyMember,
                "add session member",
            )),
        }
    }

    async fn find_by_id(
        &self,
        id: MemberId,
    ) -> Result<Option<SessionMember>, SessionsServiceError> {
        let model = session_members::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find session member by id")?;
        Ok(model.map(member_from_model))
    }

    async fn list_by_session(
        &self,
        session_id: SessionId,
        sort: Sort,
        page: PageRequest,
    ) -> Result<Vec<SessionMember>, SessionsServiceError> {
        let PageRequest { per_page, page } = page.clamped();
        let query = session_members::Entity::find()
            .filter(session_members::Column::SessionId.eq(session_id.0));
        let query = match sort {
            Sort::Asc => query.order_by_asc(session_members::Column::CreatedAt),
            Sort::Desc => query.order_by_desc(session_members::Column::CreatedAt),
        };
        let models = query
            .offset(((page - 1) * per_page) as u64)
            .limit(per_page as u64)
            .all(&self.db)
            .await
            .context("list session members")?;
        Ok(models.into_iter().map(member_from_model).collect())
    }

    async fn remove(
        &self,
        session_id: SessionId,
        member_id: UserId,
    ) -> Result<bool, SessionsServiceError> {
        let result = session_members::Entity::delete_many()
            .filter(session_members::Column::SessionId.eq(session_id.0))
            .filter(session_members::Column::MemberId.eq(member_id.0))
            .exec(&self.db)
            .await
            .context("remove session member")?;
        Ok(result.rows_affected > 0)
    }
}

fn member_from_model(model: session_members::Model) -> SessionMember {
    SessionMember {
        id: MemberId(model.id),
        session_id: SessionId(model.session_id),
        member_id: UserId(model.member_id),
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Action item repository ───────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbActionItemRepository {
    pub db: DatabaseConnection,
}

impl ActionItemRepository for DbActionItemRepository {
    async fn create(
        &self,
        session_id: SessionId,
        owner_id: UserId,
        text: &str,
    ) -> Result<RetroActionItem, SessionsServiceError> {
        let now = Utc::now();
        let result = retro_action_items::ActiveModel {
            owner_id: Set(owner_id.0),
            session_id: Set(session_id.0),
            action_item_text: Set(text.to_owned()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await;
        match result {
            Ok(model) => Ok(action_item_from_model(model)),
            Err(e) => match e.sql_err() {
                Some(SqlErr::ForeignKeyConstraintViolation(message)) => Err(fk_violation(&message)),
                _ => Err(anyhow::Error::new(e).context("create action item").into()),
            },
        }
    }

    async fn find_by_id(
        &self,
        id: ActionItemId,
    ) -> Result<Option<RetroActionItem>, SessionsServiceError> {
        let model = retro_action_items::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find action item by id")?;
        Ok(model.map(action_item_from_model))
    }

    async fn list_by_session(
        &self,
        session_id: SessionId,
        sort: Sort,
        page: PageRequest,
    ) -> Result<Vec<RetroActionItem>, SessionsServiceError> {
        let PageRequest { per_page, page } = page.clamped();
        let query = retro_action_items::Entity::find()
            .filter(retro_action_items::Column::SessionId.eq(session_id.0));
        let query = match sort {
            Sort::Asc => query.order_by_asc(retro_action_items::Column::CreatedAt),
            Sort::Desc => query.order_by_desc(retro_action_items::Column::CreatedAt),
        };
        let models = query
            .offset(((page - 1) * per_page) as u64)
            .limit(per_page as u64)
            .all(&self.db)
            .await
            .context("list action items")?;
        Ok(models.into_iter().map(action_item_from_model).collect())
    }

    async fn update_text(
        &self,
        id: ActionItemId,
        text: &str,
    ) -> Result<(), SessionsServiceError> {
        // created_at is never touched after insert; updated_at always is.
        let am = retro_action_items::ActiveModel {
            id: Set(id.0),
            action_item_text: Set(text.to_owned()),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };
        match am.update(&self.db).await {
            Ok(_) => Ok(()),
            Err(DbErr::RecordNotUpdated) => Err(SessionsServiceError::ActionItemNotFound),
            Err(e) => Err(anyhow::Error::new(e).context("update action item text").into()),
        }
    }

    async fn delete(&self, id: ActionItemId) -> Result<bool, SessionsServiceError> {
        let result = retro_action_items::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .context("delete action item")?;
        Ok(result.rows_affected > 0)
    }
}

fn action_item_from_model(model: retro_action_items::Model) -> RetroActionItem {
    RetroActionItem {
        id: ActionItemId(model.id),
        owner_id: UserId(model.owner_id),
        session_id: SessionId(model.session_id),
        action_item_text: model.action_item_text,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Story repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbStoryRepository {
    pub db: DatabaseConnection,
}

impl StoryRepository for DbStoryRepository {
    async fn create(&self, story: &NewStory) -> Result<Story, SessionsServiceError> {
        let result = stories::ActiveModel {
            title: Set(story.title.clone()),
            description: Set(story.description.clone()),
            story_points: Set(story.story_points),
            session_id: Set(story.session_id.0),
            ..Default::default()
        }
        .insert(&self.db)
        .await;
        match result {
            Ok(model) => Ok(story_from_model(model)),
            Err(e) => match e.sql_err() {
                Some(SqlErr::ForeignKeyConstraintViolation(message)) => Err(fk_violation(&message)),
                _ => Err(anyhow::Error::new(e).context("create story").into()),
            },
        }
    }

    async fn find_by_id(&self, id: StoryId) -> Result<Option<Story>, SessionsServiceError> {
        let model = stories::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find story by id")?;
        Ok(model.map(story_from_model))
    }

    async fn list_by_session(
        &self,
        session_id: SessionId,
        sort: Sort,
        page: PageRequest,
    ) -> Result<Vec<Story>, SessionsServiceError> {
        let PageRequest { per_page, page } = page.clamped();
        let query = stories::Entity::find().filter(stories::Column::SessionId.eq(session_id.0));
        let query = match sort {
            Sort::Asc => query.order_by_asc(stories::Column::Id),
            Sort::Desc => query.order_by_desc(stories::Column::Id),
        };
        let models = query
            .offset(((page - 1) * per_page) as u64)
            .limit(per_page as u64)
            .all(&self.db)
            .await
            .context("list stories")?;
        Ok(models.into_iter().map(story_from_model).collect())
    }

    async fn update(
        &self,
        id: StoryId,
        title: Option<&str>,
        description: Option<&str>,
        story_points: Option<i32>,
    ) -> Result<(), SessionsServiceError> {
        let mut am = stories::ActiveModel {
            id: Set(id.0),
            ..Default::default()
        };
        if let Some(new_title) = title {
            am.title = Set(new_title.to_owned());
        }
        if let Some(new_description) = description {
            am.description = Set(Some(new_description.to_owned()));
        }
        if let Some(new_points) = story_points {
            am.story_points = Set(new_points);
        }
        match am.update(&self.db).await {
            Ok(_) => Ok(()),
            Err(DbErr::RecordNotUpdated) => Err(SessionsServiceError::StoryNotFound),
            Err(e) => Err(anyhow::Error::new(e).context("update story").into()),
        }
    }

    async fn delete(&self, id: StoryId) -> Result<bool, SessionsServiceError> {
        let result = stories::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .context("delete story")?;
        Ok(result.rows_affected > 0)
    }
}

fn story_from_model(model: stories::Model) -> Story {
    Story {
        id: StoryId(model.id),
        title: model.title,
        description: model.description,
        story_points: model.story_points,
        session_id: SessionId(model.session_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_resolve_fk_violation_by_referencing_column() {
        assert!(matches!(
            fk_violation("insert violates foreign key constraint \"stories_session_id_fkey\""),
            SessionsServiceError::SessionNotFound
        ));
        assert!(matches!(
            fk_violation(
                "insert violates foreign key constraint \"session_members_member_id_fkey\""
            ),
            SessionsServiceError::UserNotFound
        ));
        assert!(matches!(
            fk_violation(
                "insert violates foreign key constraint \"retro_action_items_owner_id_fkey\""
            ),
            SessionsServiceError::UserNotFound
        ));
        assert!(matches!(
            fk_violation("something else entirely"),
            SessionsServiceError::Internal(_)
        ));
    }
}
