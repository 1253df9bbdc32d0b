// Module name shadows the `serde` crate — use `::serde` for the external crate.
use ::serde::Serializer;
use chrono::{DateTime, SecondsFormat, Utc};

/// Serialize `DateTime<Utc>` as RFC 3339 with 3-digit fractional seconds,
/// always in UTC with a `Z` suffix. Every timestamp a session record exposes
/// goes through this, so roster and action-item payloads carry one canonical
/// format.
pub fn to_rfc3339_ms<S>(dt: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    s.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Same format for nullable timestamps such as a user's last login.
pub fn to_rfc3339_ms_opt<S>(dt: &Option<DateTime<Utc>>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match dt {
        Some(dt) => to_rfc3339_ms(dt, s),
        None => s.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::serde::Serialize;
    use chrono::TimeZone;

    #[derive(Serialize)]
    struct Stamps {
        #[serde(serialize_with = "to_rfc3339_ms")]
        created_at: DateTime<Utc>,
        #[serde(serialize_with = "to_rfc3339_ms_opt")]
        last_login: Option<DateTime<Utc>>,
    }

    #[test]
    fn should_format_timestamps_as_rfc3339_with_millis() {
        let stamps = Stamps {
            created_at: Utc.with_ymd_and_hms(2023, 2, 11, 11, 9, 0).unwrap(),
            last_login: Some(Utc.with_ymd_and_hms(2023, 2, 12, 8, 30, 5).unwrap()),
        };
        let json = serde_json::to_value(&stamps).unwrap();
        assert_eq!(json["created_at"], "2023-02-11T11:09:00.000Z");
        assert_eq!(json["last_login"], "2023-02-12T08:30:05.000Z");
    }

    #[test]
    fn should_serialize_missing_last_login_as_null() {
        let stamps = Stamps {
            created_at: Utc.with_ymd_and_hms(2023, 2, 11, 11, 9, 0).unwrap(),
            last_login: None,
        };
        let json = serde_json::to_value(&stamps).unwrap();
        assert!(json["last_login"].is_null());
    }
}
