//! Newtype wrappers for domain identifiers.
//!
//! All storage primary keys are auto-increment `i64`; the newtypes keep
//! session/user/story ids from being mixed up at call sites.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse()?))
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }
    };
}

define_id! {
    /// Identifies a user account.
    UserId
}

define_id! {
    /// Identifies a collaborative session (retro board or poker table).
    SessionId
}

define_id! {
    /// Identifies a session membership row.
    MemberId
}

define_id! {
    /// Identifies a retro action item.
    ActionItemId
}

define_id! {
    /// Identifies a planning-poker story card.
    StoryId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_round_trip_session_id_via_display_and_from_str() {
        let id = SessionId(42);
        let s = id.to_string();
        let parsed: SessionId = s.parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_round_trip_user_id_via_display_and_from_str() {
        let id = UserId(7);
        let parsed: UserId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_serialize_ids_as_plain_integers() {
        let json = serde_json::to_string(&StoryId(13)).unwrap();
        assert_eq!(json, "13");
        let parsed: StoryId = serde_json::from_str("13").unwrap();
        assert_eq!(parsed, StoryId(13));
    }

    #[test]
    fn should_reject_non_numeric_id_strings() {
        assert!("abc".parse::<ActionItemId>().is_err());
        assert!("".parse::<MemberId>().is_err());
    }
}
