use huddle_domain::id::{SessionId, UserId};
use huddle_domain::pagination::{PageRequest, Sort};
use huddle_domain::session::SessionKind;

use crate::domain::repository::SessionRepository;
use crate::domain::types::{
    DESCRIPTION_MAX_LEN, SESSION_TITLE_MAX_LEN, Session, ensure_max_len,
};
use crate::error::SessionsServiceError;

// ── CreateSession ────────────────────────────────────────────────────────────

pub struct CreateSessionInput {
    pub owner_id: UserId,
    pub title: String,
    pub description: Option<String>,
    pub kind: Option<SessionKind>,
}

pub struct CreateSessionUseCase<R: SessionRepository> {
    pub repo: R,
}

impl<R: SessionRepository> CreateSessionUseCase<R> {
    /// Creates the session and enrolls the owner as its first member in the
    /// same transaction.
    pub async fn execute(&self, input: CreateSessionInput) -> Result<Session, SessionsServiceError> {
        if input.title.is_empty() {
            return Err(SessionsServiceError::MissingData);
        }
        ensure_max_len("title", &input.title, SESSION_TITLE_MAX_LEN)?;
        if let Some(ref description) = input.description {
            ensure_max_len("description", description, DESCRIPTION_MAX_LEN)?;
        }
        self.repo
            .create_with_owner_membership(
                input.owner_id,
                &input.title,
                input.description.as_deref(),
                input.kind,
            )
            .await
    }
}

// ── GetSession ───────────────────────────────────────────────────────────────

pub struct GetSessionUseCase<R: SessionRepository> {
    pub repo: R,
}

impl<R: SessionRepository> GetSessionUseCase<R> {
    pub async fn execute(&self, session_id: SessionId) -> Result<Session, SessionsServiceError> {
        self.repo
            .find_by_id(session_id)
            .await?
            .ok_or(SessionsServiceError::SessionNotFound)
    }
}

// ── ListOwnedSessions ────────────────────────────────────────────────────────

pub struct ListOwnedSessionsUseCase<R: SessionRepository> {
    pub repo: R,
}

impl<R: SessionRepository> ListOwnedSessionsUseCase<R> {
    pub async fn execute(
        &self,
        owner_id: UserId,
        sort: Sort,
        page: PageRequest,
    ) -> Result<Vec<Session>, SessionsServiceError> {
        self.repo.list_by_owner(owner_id, sort, page).await
    }
}

// ── UpdateSession ────────────────────────────────────────────────────────────

pub struct UpdateSessionInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub kind: Option<SessionKind>,
}

pub struct UpdateSessionUseCase<R: SessionRepository> {
    pub repo: R,
}

impl<R: SessionRepository> UpdateSessionUseCase<R> {
    pub async fn execute(
        &self,
        session_id: SessionId,
        input: UpdateSessionInput,
    ) -> Result<(), SessionsServiceError> {
        if input.title.is_none() && input.description.is_none() && input.kind.is_none() {
            return Err(SessionsServiceError::MissingData);
        }
        if let Some(ref title) = input.title {
            ensure_max_len("title", title, SESSION_TITLE_MAX_LEN)?;
        }
        if let Some(ref description) = input.description {
            ensure_max_len("description", description, DESCRIPTION_MAX_LEN)?;
        }
        self.repo
            .update(
                session_id,
                input.title.as_deref(),
                input.description.as_deref(),
                input.kind,
            )
            .await
    }
}

// ── DeleteSession ────────────────────────────────────────────────────────────

pub struct DeleteSessionUseCase<R: SessionRepository> {
    pub repo: R,
}

impl<R: SessionRepository> DeleteSessionUseCase<R> {
    /// Removes the session together with its roster, action items, and
    /// stories. The whole removal is atomic.
    pub async fn execute(&self, session_id: SessionId) -> Result<(), SessionsServiceError> {
        self.repo.delete_cascade(session_id).await
    }
}
