/// Sessions service domain error variants.
///
/// Everything here is recovered at the caller's boundary; nothing retries
/// internally. Constraint violations raised by the storage layer are mapped
/// into the matching variant in `infra/db.rs`.
#[derive(Debug, thiserror::Error)]
pub enum SessionsServiceError {
    #[error("user not found")]
    UserNotFound,
    #[error("session not found")]
    SessionNotFound,
    #[error("session member not found")]
    MemberNotFound,
    #[error("action item not found")]
    ActionItemNotFound,
    #[error("story not found")]
    StoryNotFound,
    #[error("email already registered")]
    EmailAlreadyExists,
    #[error("already a member of this session")]
    AlreadyMember,
    #[error("user is referenced by session records")]
    UserInUse,
    #[error("invalid username")]
    InvalidUsername,
    #[error("{field} exceeds {max} characters")]
    FieldTooLong { field: &'static str, max: usize },
    #[error("missing data")]
    MissingData,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl SessionsServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::SessionNotFound => "SESSION_NOT_FOUND",
            Self::MemberNotFound => "MEMBER_NOT_FOUND",
            Self::ActionItemNotFound => "ACTION_ITEM_NOT_FOUND",
            Self::StoryNotFound => "STORY_NOT_FOUND",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::AlreadyMember => "ALREADY_MEMBER",
            Self::UserInUse => "USER_IN_USE",
            Self::InvalidUsername => "INVALID_USERNAME",
            Self::FieldTooLong { .. } => "FIELD_TOO_LONG",
            Self::MissingData => "MISSING_DATA",
            Self::Internal(_) => "INTERNAL",
        }
    }
}
