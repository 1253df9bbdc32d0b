use chrono::{DateTime, Utc};
use serde::Serialize;

use huddle_domain::id::{ActionItemId, MemberId, SessionId, StoryId, UserId};
use huddle_domain::session::SessionKind;

use crate::error::SessionsServiceError;

/// Display-name cap.
pub const USERNAME_MAX_LEN: usize = 150;
pub const SESSION_TITLE_MAX_LEN: usize = 30;
pub const DESCRIPTION_MAX_LEN: usize = 100;
pub const ACTION_ITEM_TEXT_MAX_LEN: usize = 2000;
pub const STORY_TITLE_MAX_LEN: usize = 50;

/// User account. `email` is the unique login identifier; `username` is an
/// advisory display name and may collide.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_active: bool,
    pub is_staff: bool,
    #[serde(serialize_with = "huddle_core::serde::to_rfc3339_ms")]
    pub joined_at: DateTime<Utc>,
    #[serde(serialize_with = "huddle_core::serde::to_rfc3339_ms_opt")]
    pub last_login: Option<DateTime<Utc>>,
}

/// A collaborative room: retro board or planning-poker table.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: SessionId,
    pub title: String,
    pub description: Option<String>,
    pub kind: Option<SessionKind>,
    pub owner_id: Option<UserId>,
}

impl Session {
    /// Topic name real-time subscribers of this session listen on.
    /// Stable for the session's lifetime; derived from the id alone.
    pub fn channel_name(&self) -> String {
        self.id.channel_name()
    }
}

/// Roster row: a user attending a session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionMember {
    pub id: MemberId,
    pub session_id: SessionId,
    pub member_id: UserId,
    #[serde(serialize_with = "huddle_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "huddle_core::serde::to_rfc3339_ms")]
    pub updated_at: DateTime<Utc>,
}

/// Follow-up task recorded during a retrospective.
#[derive(Debug, Clone, Serialize)]
pub struct RetroActionItem {
    pub id: ActionItemId,
    pub owner_id: UserId,
    pub session_id: SessionId,
    pub action_item_text: String,
    #[serde(serialize_with = "huddle_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "huddle_core::serde::to_rfc3339_ms")]
    pub updated_at: DateTime<Utc>,
}

/// Planning-poker card with an unbounded integer estimate.
#[derive(Debug, Clone, Serialize)]
pub struct Story {
    pub id: StoryId,
    pub title: String,
    pub description: Option<String>,
    pub story_points: i32,
    pub session_id: SessionId,
}

/// Validate a display username: non-empty, at most 150 characters, every
/// character a letter, digit, or one of `. @ + - _` or space.
pub fn validate_username(username: &str) -> bool {
    if username.is_empty() || username.chars().count() > USERNAME_MAX_LEN {
        return false;
    }
    username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '@' | '+' | '-' | '_' | ' '))
}

/// Enforce a character-count cap on a text field. Errors name the field;
/// values are never silently truncated.
pub fn ensure_max_len(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<(), SessionsServiceError> {
    if value.chars().count() > max {
        return Err(SessionsServiceError::FieldTooLong { field, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_valid_usernames() {
        assert!(validate_username("jane.doe"));
        assert!(validate_username("jane doe"));
        assert!(validate_username("jane_doe-42"));
        assert!(validate_username("jane@example+dev"));
        assert!(validate_username("j"));
    }

    #[test]
    fn should_reject_disallowed_characters() {
        assert!(!validate_username("jane!doe"));
        assert!(!validate_username("jane#doe"));
        assert!(!validate_username("jane/doe"));
        assert!(!validate_username("jane\tdoe"));
    }

    #[test]
    fn should_reject_empty_username() {
        assert!(!validate_username(""));
    }

    #[test]
    fn should_reject_username_over_150_chars() {
        let long = "a".repeat(151);
        assert!(!validate_username(&long));
        let exact = "a".repeat(150);
        assert!(validate_username(&exact));
    }

    #[test]
    fn should_enforce_field_length_caps() {
        assert!(ensure_max_len("title", "retro week 12", SESSION_TITLE_MAX_LEN).is_ok());
        let over = "x".repeat(31);
        let err = ensure_max_len("title", &over, SESSION_TITLE_MAX_LEN).unwrap_err();
        assert!(matches!(
            err,
            SessionsServiceError::FieldTooLong {
                field: "title",
                max: 30
            }
        ));
    }

    #[test]
    fn should_count_characters_not_bytes() {
        // 30 multibyte characters fit a 30-char title.
        let title = "é".repeat(30);
        assert!(ensure_max_len("title", &title, SESSION_TITLE_MAX_LEN).is_ok());
    }

    #[test]
    fn should_keep_channel_name_independent_of_mutable_fields() {
        let mut session = Session {
            id: SessionId(42),
            title: "sprint retro".into(),
            description: None,
            kind: Some(huddle_domain::session::SessionKind::Retro),
            owner_id: Some(UserId(1)),
        };
        assert_eq!(session.channel_name(), "session-42");
        session.title = "renamed".into();
        session.description = Some("still the same room".into());
        assert_eq!(session.channel_name(), "session-42");
    }

    #[test]
    fn should_not_serialize_password_hash() {
        let user = User {
            id: UserId(1),
            email: "jane@example.com".into(),
            username: "jane doe".into(),
            password_hash: "secret".into(),
            is_active: true,
            is_staff: false,
            joined_at: Utc::now(),
            last_login: None,
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("secret"));
        assert!(json.contains("jane@example.com"));
    }
}
