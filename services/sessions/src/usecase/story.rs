use huddle_domain::id::{SessionId, StoryId};
use huddle_domain::pagination::{PageRequest, Sort};

use crate::domain::repository::{NewStory, StoryRepository};
use crate::domain::types::{DESCRIPTION_MAX_LEN, STORY_TITLE_MAX_LEN, Story, ensure_max_len};
use crate::error::SessionsServiceError;

// ── AddStory ─────────────────────────────────────────────────────────────────

pub struct AddStoryInput {
    pub session_id: SessionId,
    pub title: String,
    pub description: Option<String>,
    /// Unbounded estimate: negative, zero, and large values all pass.
    pub story_points: i32,
}

pub struct AddStoryUseCase<R: StoryRepository> {
    pub repo: R,
}

impl<R: StoryRepository> AddStoryUseCase<R> {
    pub async fn execute(&self, input: AddStoryInput) -> Result<Story, SessionsServiceError> {
        if input.title.is_empty() {
            return Err(SessionsServiceError::MissingData);
        }
        ensure_max_len("title", &input.title, STORY_TITLE_MAX_LEN)?;
        if let Some(ref description) = input.description {
            ensure_max_len("description", description, DESCRIPTION_MAX_LEN)?;
        }
        self.repo
            .create(&NewStory {
                session_id: input.session_id,
                title: input.title,
                description: input.description,
                story_points: input.story_points,
            })
            .await
    }
}

// ── ListStories ──────────────────────────────────────────────────────────────

pub struct ListStoriesUseCase<R: StoryRepository> {
    pub repo: R,
}

impl<R: StoryRepository> ListStoriesUseCase<R> {
    pub async fn execute(
        &self,
        session_id: SessionId,
        sort: Sort,
        page: PageRequest,
    ) -> Result<Vec<Story>, SessionsServiceError> {
        self.repo.list_by_session(session_id, sort, page).await
    }
}

// ── UpdateStory ──────────────────────────────────────────────────────────────

pub struct UpdateStoryInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub story_points: Option<i32>,
}

pub struct UpdateStoryUseCase<R: StoryRepository> {
    pub repo: R,
}

impl<R: StoryRepository> UpdateStoryUseCase<R> {
    pub async fn execute(
        &self,
        story_id: StoryId,
        input: UpdateStoryInput,
    ) -> Result<(), SessionsServiceError> {
        if input.title.is_none() && input.description.is_none() && input.story_points.is_none() {
            return Err(SessionsServiceError::MissingData);
        }
        if let Some(ref title) = input.title {
            ensure_max_len("title", title, STORY_TITLE_MAX_LEN)?;
        }
        if let Some(ref description) = input.description {
            ensure_max_len("description", description, DESCRIPTION_MAX_LEN)?;
        }
        self.repo
            .update(
                story_id,
                input.title.as_deref(),
                input.description.as_deref(),
                input.story_points,
            )
            .await
    }
}

// ── DeleteStory ──────────────────────────────────────────────────────────────

pub struct DeleteStoryUseCase<R: StoryRepository> {
    pub repo: R,
}

impl<R: StoryRepository> DeleteStoryUseCase<R> {
    pub async fn execute(&self, story_id: StoryId) -> Result<(), SessionsServiceError> {
        if !self.repo.delete(story_id).await? {
            return Err(SessionsServiceError::StoryNotFound);
        }
        Ok(())
    }
}
