//! The authenticated user context consumed by access decisions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::classification::ClassificationLevel;
use crate::role::Role;

/// An already-authenticated user, as seen by the access-control engine.
///
/// Built once per request by the authentication layer. The engine only
/// ever borrows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserContext {
    /// The user's unique identifier.
    pub user_id: String,
    /// Roles held by the user. An empty set denies everything.
    #[serde(default)]
    pub roles: BTreeSet<Role>,
    /// Highest classification level the user may view.
    #[serde(default)]
    pub clearance_level: ClassificationLevel,
}

impl UserContext {
    /// Creates a context with no roles.
    pub fn new(user_id: impl Into<String>, clearance_level: ClassificationLevel) -> Self {
        Self {
            user_id: user_id.into(),
            roles: BTreeSet::new(),
            clearance_level,
        }
    }

    /// Adds a role.
    pub fn with_role(mut self, role: Role) -> Self {
        self.roles.insert(role);
        self
    }

    /// Adds several roles.
    pub fn with_roles(mut self, roles: impl IntoIterator<Item = Role>) -> Self {
        self.roles.extend(roles);
        self
    }

    /// Whether the user holds `role`.
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Whether the user holds no role at all.
    pub fn has_no_roles(&self) -> bool {
        self.roles.is_empty()
    }
}
