#![allow(async_fn_in_trait)]

use huddle_domain::id::{ActionItemId, MemberId, SessionId, StoryId, UserId};
use huddle_domain::pagination::{PageRequest, Sort};
use huddle_domain::session::SessionKind;

use crate::domain::types::{RetroActionItem, Session, SessionMember, Story, User};
use crate::error::SessionsServiceError;

/// Repository for user accounts.
pub trait UserRepository: Send + Sync {
    /// Insert a new account. Duplicate email surfaces as
    /// [`SessionsServiceError::EmailAlreadyExists`]; duplicate usernames are
    /// allowed. Returns the assigned id.
    async fn create(&self, user: &NewUser) -> Result<User, SessionsServiceError>;

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, SessionsServiceError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, SessionsServiceError>;

    /// Update username and/or email. `None` leaves the field unchanged.
    async fn update_profile(
        &self,
        id: UserId,
        username: Option<&str>,
        email: Option<&str>,
    ) -> Result<(), SessionsServiceError>;

    /// Delete an account. Fails with [`SessionsServiceError::UserInUse`]
    /// while roster rows or action items still reference the user; sessions
    /// the user owns survive with owner nulled.
    async fn delete(&self, id: UserId) -> Result<(), SessionsServiceError>;
}

/// Insert payload for a user account.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub password_hash: String,
}

/// Repository for collaborative sessions.
pub trait SessionRepository: Send + Sync {
    /// Insert the session row and the owner's roster row in one
    /// transaction. Either both exist afterwards or neither does.
    async fn create_with_owner_membership(
        &self,
        owner_id: UserId,
        title: &str,
        description: Option<&str>,
        kind: Option<SessionKind>,
    ) -> Result<Session, SessionsServiceError>;

    async fn find_by_id(&self, id: SessionId) -> Result<Option<Session>, SessionsServiceError>;

    /// List sessions owned by a user, ordered by creation time.
    async fn list_by_owner(
        &self,
        owner_id: UserId,
        sort: Sort,
        page: PageRequest,
    ) -> Result<Vec<Session>, SessionsServiceError>;

    /// Update title/description/kind. `None` leaves the field unchanged.
    async fn update(
        &self,
        id: SessionId,
        title: Option<&str>,
        description: Option<&str>,
        kind: Option<SessionKind>,
    ) -> Result<(), SessionsServiceError>;

    /// Delete the session and everything it contains: roster rows and
    /// action items go in the same transaction, stories cascade at the
    /// storage layer. Never partially succeeds.
    async fn delete_cascade(&self, id: SessionId) -> Result<(), SessionsServiceError>;
}

/// Repository for session rosters.
pub trait MemberRepository: Send + Sync {
    /// Add a user to a session. A second row for the same (session, member)
    /// pair surfaces as [`SessionsServiceError::AlreadyMember`].
    async fn add(
        &self,
        session_id: SessionId,
        member_id: UserId,
    ) -> Result<SessionMember, SessionsServiceError>;

    async fn find_by_id(&self, id: MemberId)
    -> Result<Option<SessionMember>, SessionsServiceError>;

    /// List the roster of a session, ordered by join time.
    async fn list_by_session(
        &self,
        session_id: SessionId,
        sort: Sort,
        page: PageRequest,
    ) -> Result<Vec<SessionMember>, SessionsServiceError>;

    /// Remove a membership. Returns `true` if a row was deleted.
    async fn remove(
        &self,
        session_id: SessionId,
        member_id: UserId,
    ) -> Result<bool, SessionsServiceError>;
}

/// Repository for retro action items.
pub trait ActionItemRepository: Send + Sync {
    async fn create(
        &self,
        session_id: SessionId,
        owner_id: UserId,
        text: &str,
    ) -> Result<RetroActionItem, SessionsServiceError>;

    async fn find_by_id(
        &self,
        id: ActionItemId,
    ) -> Result<Option<RetroActionItem>, SessionsServiceError>;

    /// List the action items of a session, ordered by creation time.
    async fn list_by_session(
        &self,
        session_id: SessionId,
        sort: Sort,
        page: PageRequest,
    ) -> Result<Vec<RetroActionItem>, SessionsServiceError>;

    /// Replace the text and refresh `updated_at`.
    async fn update_text(&self, id: ActionItemId, text: &str)
    -> Result<(), SessionsServiceError>;

    /// Delete an action item. Returns `true` if a row was deleted.
    async fn delete(&self, id: ActionItemId) -> Result<bool, SessionsServiceError>;
}

/// Repository for planning-poker stories.
pub trait StoryRepository: Send + Sync {
    async fn create(&self, story: &NewStory) -> Result<Story, SessionsServiceError>;

    async fn find_by_id(&self, id: StoryId) -> Result<Option<Story>, SessionsServiceError>;

    /// List the stories of a session, ordered by creation time.
    async fn list_by_session(
        &self,
        session_id: SessionId,
        sort: Sort,
        page: PageRequest,
    ) -> Result<Vec<Story>, SessionsServiceError>;

    /// Update title/description/points. `None` leaves the field unchanged.
    async fn update(
        &self,
        id: StoryId,
        title: Option<&str>,
        description: Option<&str>,
        story_points: Option<i32>,
    ) -> Result<(), SessionsServiceError>;

    /// Delete a story. Returns `true` if a row was deleted.
    async fn delete(&self, id: StoryId) -> Result<bool, SessionsServiceError>;
}

/// Insert payload for a story card.
#[derive(Debug, Clone)]
pub struct NewStory {
    pub session_id: SessionId,
    pub title: String,
    pub description: Option<String>,
    pub story_points: i32,
}
