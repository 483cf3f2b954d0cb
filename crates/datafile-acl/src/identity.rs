//! User and group identities.
//!
//! Identities are opaque strings. No normalization or validation is applied:
//! `"Alice"` and `"alice"` are different users.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! string_identity {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an identity from any string.
            pub fn new<S: Into<String>>(id: S) -> Self {
                Self(id.into())
            }

            /// Returns the identity as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

string_identity!(
    /// Identity of a user allowed to access a file.
    UserId
);

string_identity!(
    /// Identity of a group allowed to access a file.
    GroupId
);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_creation() {
        let id = UserId::new("alice");
        assert_eq!(id.as_str(), "alice");
    }

    #[test]
    fn test_group_id_from_string() {
        let id = GroupId::from("analysts".to_string());
        assert_eq!(id.as_str(), "analysts");
    }

    #[test]
    fn test_identity_is_case_sensitive() {
        assert_ne!(UserId::from("Alice"), UserId::from("alice"));
    }

    #[test]
    fn test_display() {
        assert_eq!(UserId::new("bob").to_string(), "bob");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&GroupId::new("ops")).unwrap();
        assert_eq!(json, "\"ops\"");
        let back: GroupId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, GroupId::new("ops"));
    }

    #[test]
    fn test_empty_identity_is_allowed() {
        assert_eq!(UserId::new("").as_str(), "");
    }
}
