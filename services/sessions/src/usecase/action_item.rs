use huddle_domain::id::{ActionItemId, SessionId, UserId};
use huddle_domain::pagination::{PageRequest, Sort};

use crate::domain::repository::ActionItemRepository;
use crate::domain::types::{ACTION_ITEM_TEXT_MAX_LEN, RetroActionItem, ensure_max_len};
use crate::error::SessionsServiceError;

// ── RecordActionItem ─────────────────────────────────────────────────────────

pub struct RecordActionItemUseCase<R: ActionItemRepository> {
    pub repo: R,
}

impl<R: ActionItemRepository> RecordActionItemUseCase<R> {
    pub async fn execute(
        &self,
        session_id: SessionId,
        owner_id: UserId,
        text: &str,
    ) -> Result<RetroActionItem, SessionsServiceError> {
        if text.is_empty() {
            return Err(SessionsServiceError::MissingData);
        }
        ensure_max_len("action_item_text", text, ACTION_ITEM_TEXT_MAX_LEN)?;
        self.repo.create(session_id, owner_id, text).await
    }
}

// ── ListActionItems ──────────────────────────────────────────────────────────

pub struct ListActionItemsUseCase<R: ActionItemRepository> {
    pub repo: R,
}

impl<R: ActionItemRepository> ListActionItemsUseCase<R> {
    pub async fn execute(
        &self,
        session_id: SessionId,
        sort: Sort,
        page: PageRequest,
    ) -> Result<Vec<RetroActionItem>, SessionsServiceError> {
        self.repo.list_by_session(session_id, sort, page).await
    }
}

// ── UpdateActionItemText ─────────────────────────────────────────────────────

pub struct UpdateActionItemTextUseCase<R: ActionItemRepository> {
    pub repo: R,
}

impl<R: ActionItemRepository> UpdateActionItemTextUseCase<R> {
    pub async fn execute(
        &self,
        id: ActionItemId,
        text: &str,
    ) -> Result<(), SessionsServiceError> {
        if text.is_empty() {
            return Err(SessionsServiceError::MissingData);
        }
        ensure_max_len("action_item_text", text, ACTION_ITEM_TEXT_MAX_LEN)?;
        self.repo.update_text(id, text).await
    }
}

// ── DeleteActionItem ─────────────────────────────────────────────────────────

pub struct DeleteActionItemUseCase<R: ActionItemRepository> {
    pub repo: R,
}

impl<R: ActionItemRepository> DeleteActionItemUseCase<R> {
    pub async fn execute(&self, id: ActionItemId) -> Result<(), SessionsServiceError> {
        if !self.repo.delete(id).await? {
            return Err(SessionsServiceError::ActionItemNotFound);
        }
        Ok(())
    }
}
