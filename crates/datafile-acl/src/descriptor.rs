//! The access descriptor record.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::identity::{GroupId, UserId};
use crate::visibility::Visibility;

/// Access policy of a single data file.
///
/// The path is fixed at construction. User and group sets only grow, and
/// visibility is replaced wholesale. These three operations are the whole
/// mutation surface.
///
/// Serialized form:
///
/// ```json
/// {
///   "path": "/data/a.csv",
///   "allowed_users": ["alice"],
///   "allowed_groups": [],
///   "visibility": "public"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessDescriptor {
    path: String,
    #[serde(default)]
    allowed_users: BTreeSet<UserId>,
    #[serde(default)]
    allowed_groups: BTreeSet<GroupId>,
    #[serde(default)]
    visibility: Visibility,
}

impl AccessDescriptor {
    /// Creates a private descriptor with no users or groups.
    ///
    /// The path is not validated; empty or malformed paths are accepted.
    pub fn new<S: Into<String>>(path: S) -> Self {
        Self {
            path: path.into(),
            allowed_users: BTreeSet::new(),
            allowed_groups: BTreeSet::new(),
            visibility: Visibility::Private,
        }
    }

    /// Allows `user`. Adding an existing user is a no-op.
    pub fn add_user<U: Into<UserId>>(&mut self, user: U) {
        let user = user.into();
        if self.allowed_users.insert(user.clone()) {
            log::debug!("{}: allowed user {user}", self.path);
        }
    }

    /// Allows `group`. Adding an existing group is a no-op.
    pub fn add_group<G: Into<GroupId>>(&mut self, group: G) {
        let group = group.into();
        if self.allowed_groups.insert(group.clone()) {
            log::debug!("{}: allowed group {group}", self.path);
        }
    }

    /// Replaces the visibility.
    pub fn set_visibility(&mut self, visibility: Visibility) {
        log::debug!("{}: visibility {} -> {visibility}", self.path, self.visibility);
        self.visibility = visibility;
    }

    /// The path this descriptor was created for.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Allowed users in sorted order.
    pub fn allowed_users(&self) -> impl ExactSizeIterator<Item = &UserId> {
        self.allowed_users.iter()
    }

    /// Allowed groups in sorted order.
    pub fn allowed_groups(&self) -> impl ExactSizeIterator<Item = &GroupId> {
        self.allowed_groups.iter()
    }

    /// Current visibility.
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Whether `user` has been added. This is a membership test, not an
    /// access check.
    pub fn has_user(&self, user: &str) -> bool {
        self.allowed_users.contains(user)
    }

    /// Whether `group` has been added.
    pub fn has_group(&self, group: &str) -> bool {
        self.allowed_groups.contains(group)
    }
}
