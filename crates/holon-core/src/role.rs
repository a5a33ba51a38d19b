//! User roles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A role held by a user.
///
/// Roles are unordered; what a role may do is decided by the permission
/// matrix in `holon-acl`, never by comparing roles with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full platform administration.
    Administrator,
    /// Day-to-day operation; may submit events.
    Operator,
    /// Read-only analysis across entities and events.
    Analyst,
    /// Read-only access to holons and relationships.
    Viewer,
    /// Maintains type definitions.
    SchemaManager,
}

impl Role {
    /// Every recognised role.
    pub const ALL: [Role; 5] = [
        Role::Administrator,
        Role::Operator,
        Role::Analyst,
        Role::Viewer,
        Role::SchemaManager,
    ];

    /// Configuration name (snake_case), as used in policy files.
    pub fn name(self) -> &'static str {
        match self {
            Self::Administrator => "administrator",
            Self::Operator => "operator",
            Self::Analyst => "analyst",
            Self::Viewer => "viewer",
            Self::SchemaManager => "schema_manager",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Role {
    type Err = Error;

    /// Parses a role name case-insensitively, ignoring `_`, `-` and spaces,
    /// so `schema_manager`, `SchemaManager` and `schema-manager` agree.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "administrator" => Ok(Self::Administrator),
            "operator" => Ok(Self::Operator),
            "analyst" => Ok(Self::Analyst),
            "viewer" => Ok(Self::Viewer),
            "schemamanager" => Ok(Self::SchemaManager),
            _ => Err(Error::parse("role", s)),
        }
    }
}
