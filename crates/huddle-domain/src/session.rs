//! Session domain types.

use serde::{Deserialize, Serialize};

use crate::id::SessionId;

/// What kind of collaborative session this is.
///
/// Wire format: single-character code ("R" = Retro, "P" = Poker), matching
/// the stored column value. Decode/encode at the storage boundary only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionKind {
    Retro,
    Poker,
}

impl SessionKind {
    /// Convert from the stored code. Returns `None` for unknown codes.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "R" => Some(Self::Retro),
            "P" => Some(Self::Poker),
            _ => None,
        }
    }

    /// Convert to the stored code.
    pub fn as_code(self) -> &'static str {
        match self {
            Self::Retro => "R",
            Self::Poker => "P",
        }
    }
}

impl SessionId {
    /// Topic/channel name the real-time messaging layer routes session
    /// updates on. Derived from the immutable id only, so it stays stable
    /// for the lifetime of the session regardless of title/description
    /// edits. Format and stability are guaranteed here; delivery is not.
    pub fn channel_name(self) -> String {
        format!("session-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_code_to_session_kind() {
        assert_eq!(SessionKind::from_code("R"), Some(SessionKind::Retro));
        assert_eq!(SessionKind::from_code("P"), Some(SessionKind::Poker));
        assert_eq!(SessionKind::from_code("X"), None);
        assert_eq!(SessionKind::from_code(""), None);
        assert_eq!(SessionKind::from_code("r"), None);
    }

    #[test]
    fn should_convert_session_kind_to_code() {
        assert_eq!(SessionKind::Retro.as_code(), "R");
        assert_eq!(SessionKind::Poker.as_code(), "P");
    }

    #[test]
    fn should_round_trip_session_kind_via_code() {
        for kind in [SessionKind::Retro, SessionKind::Poker] {
            assert_eq!(SessionKind::from_code(kind.as_code()), Some(kind));
        }
    }

    #[test]
    fn should_round_trip_session_kind_via_serde() {
        for kind in [SessionKind::Retro, SessionKind::Poker] {
            let json = serde_json::to_string(&kind).unwrap();
            let parsed: SessionKind = serde_json::from_str(&json).unwrap();
            assert_eq!(kind, parsed);
        }
    }

    #[test]
    fn should_derive_channel_name_from_id() {
        assert_eq!(SessionId(42).channel_name(), "session-42");
        assert_eq!(SessionId(1).channel_name(), "session-1");
    }
}
