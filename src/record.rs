//! User record value type.
//!
//! A [`UserRecord`] is an immutable triple of id, username and password.
//! Records are constructed by the caller and handed to the directory,
//! which never mutates them after insertion.

use serde::{Deserialize, Serialize};

/// Integer key identifying a record within a directory.
///
/// Uniqueness is a caller-side convention: the directory accepts
/// duplicate ids and resolves them with last-write-wins when building
/// keyed indexes.
pub type UserId = i64;

/// An immutable user entry.
///
/// Equality compares all three fields. The password is held in
/// plaintext; this crate performs no hashing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserRecord {
    id: UserId,
    username: String,
    password: String,
}

impl UserRecord {
    /// Create a new record.
    pub fn new(id: UserId, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            password: password.into(),
        }
    }

    /// Get the record id.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Get the username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Get the password.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Check whether the given credentials match this record.
    ///
    /// Both fields are compared with exact, case-sensitive equality.
    pub fn matches_credentials(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_by_value() {
        let a = UserRecord::new(1, "Ivan", "123");
        let b = UserRecord::new(1, "Ivan", "123");
        let c = UserRecord::new(1, "Ivan", "456");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn credential_match_is_case_sensitive() {
        let record = UserRecord::new(1, "Ivan", "123");
        assert!(record.matches_credentials("Ivan", "123"));
        assert!(!record.matches_credentials("ivan", "123"));
        assert!(!record.matches_credentials("Ivan", "124"));
    }

    #[test]
    fn serializes_with_snake_case_fields() {
        let record = UserRecord::new(7, "Olga", "pw");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["username"], "Olga");
        assert_eq!(json["password"], "pw");

        let back: UserRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
