/// User domain types
use crate::error::{PresenceError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A selectable person, as validated from the user list endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Unique, stable user identifier
    pub user_id: i64,

    /// Display label
    pub name: String,

    /// URL of the avatar image, if the user has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl UserRecord {
    /// Create a record without an avatar
    pub fn new(user_id: i64, name: impl Into<String>) -> Self {
        Self {
            user_id,
            name: name.into(),
            avatar: None,
        }
    }

    /// Attach an avatar URL
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Avatar URL, treating an empty string as absent
    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar.as_deref().filter(|url| !url.is_empty())
    }
}

/// A user record as it appears on the wire.
///
/// Deserializing never fails: any JSON value is accepted, and a field that
/// is missing or of the wrong type reads as `None`. One bad entry therefore
/// cannot fail the whole list; [`RawUserRecord::validate`] sorts good
/// records from malformed ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RawUserRecord {
    pub user_id: Option<i64>,
    pub name: Option<String>,
    pub avatar: Option<String>,
}

impl<'de> Deserialize<'de> for RawUserRecord {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

impl RawUserRecord {
    /// Read the known fields out of an arbitrary JSON value
    pub fn from_value(value: &Value) -> Self {
        let text = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_owned);
        Self {
            user_id: value.get("user_id").and_then(Value::as_i64),
            name: text("name"),
            avatar: text("avatar"),
        }
    }

    /// Validate the record found at `index` in the server response
    pub fn validate(self, index: usize) -> Result<UserRecord> {
        let user_id = self
            .user_id
            .ok_or_else(|| PresenceError::malformed(index, "missing or invalid user_id"))?;
        let name = self
            .name
            .ok_or_else(|| PresenceError::malformed(index, "missing or invalid name"))?;

        Ok(UserRecord {
            user_id,
            name,
            avatar: self.avatar,
        })
    }
}

impl From<UserRecord> for RawUserRecord {
    fn from(record: UserRecord) -> Self {
        Self {
            user_id: Some(record.user_id),
            name: Some(record.name),
            avatar: record.avatar,
        }
    }
}

/// One rendered entry of the selection control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionEntry {
    /// Option value (the user id)
    pub value: i64,
    /// Visible label (the user name)
    pub label: String,
}

impl From<&UserRecord> for OptionEntry {
    fn from(record: &UserRecord) -> Self {
        Self {
            value: record.user_id,
            label: record.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_without_avatar() {
        let raw: RawUserRecord =
            serde_json::from_str(r#"{"user_id": 2, "name": "Bob"}"#).unwrap();
        let record = raw.validate(0).unwrap();
        assert_eq!(record, UserRecord::new(2, "Bob"));
        assert_eq!(record.avatar_url(), None);
    }

    #[test]
    fn test_empty_avatar_is_absent() {
        let record = UserRecord::new(1, "Alice").with_avatar("");
        assert_eq!(record.avatar_url(), None);

        let record = UserRecord::new(1, "Alice").with_avatar("a.png");
        assert_eq!(record.avatar_url(), Some("a.png"));

        let record = UserRecord::new(1, "Alice").with_avatar(" ");
        assert_eq!(record.avatar_url(), Some(" "));
    }

    #[test]
    fn test_wrong_typed_fields_do_not_fail_list() {
        let raw: Vec<RawUserRecord> = serde_json::from_str(
            r#"[
                {"user_id": 1, "name": "Alice"},
                {"user_id": "2", "name": "Bob"},
                {"user_id": 3, "name": 5},
                {"user_id": 4, "name": "Dan", "avatar": 12},
                null,
                "eve"
            ]"#,
        )
        .unwrap();
        assert_eq!(raw.len(), 6);

        let results: Vec<_> = raw
            .into_iter()
            .enumerate()
            .map(|(index, record)| record.validate(index))
            .collect();

        assert_eq!(results[0], Ok(UserRecord::new(1, "Alice")));
        assert_eq!(
            results[1],
            Err(PresenceError::malformed(1, "missing or invalid user_id"))
        );
        assert_eq!(
            results[2],
            Err(PresenceError::malformed(2, "missing or invalid name"))
        );
        assert_eq!(results[3], Ok(UserRecord::new(4, "Dan")));
        assert!(results[4].is_err());
        assert!(results[5].is_err());
    }

    #[test]
    fn test_validate_reports_missing_fields() {
        let missing_id = RawUserRecord {
            name: Some("Nobody".into()),
            ..Default::default()
        };
        assert_eq!(
            missing_id.validate(3),
            Err(PresenceError::malformed(3, "missing or invalid user_id"))
        );

        let missing_name = RawUserRecord {
            user_id: Some(7),
            ..Default::default()
        };
        assert!(matches!(
            missing_name.validate(0),
            Err(PresenceError::MalformedRecord { index: 0, .. })
        ));
    }

    #[test]
    fn test_option_entry_from_record() {
        let record = UserRecord::new(10, "User 10").with_avatar("https://intranet/api/images/users/10");
        let entry = OptionEntry::from(&record);
        assert_eq!(entry.value, 10);
        assert_eq!(entry.label, "User 10");
    }
}
