//! Operations subject to access control.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use holon_core::EntityKind;

/// An operation a user may attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Read a holon.
    ReadHolon,
    /// Read a relationship.
    ReadRelationship,
    /// Read an event from the log.
    ReadEvent,
    /// Append an event to the log.
    SubmitEvent,
    /// Change type definitions.
    ModifySchema,
}

impl Operation {
    /// Every operation.
    pub const ALL: [Operation; 5] = [
        Operation::ReadHolon,
        Operation::ReadRelationship,
        Operation::ReadEvent,
        Operation::SubmitEvent,
        Operation::ModifySchema,
    ];

    /// The read operation for an entity kind.
    pub fn read(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Holon => Self::ReadHolon,
            EntityKind::Relationship => Self::ReadRelationship,
            EntityKind::Event => Self::ReadEvent,
        }
    }

    /// Configuration name (snake_case).
    pub fn name(self) -> &'static str {
        match self {
            Self::ReadHolon => "read_holon",
            Self::ReadRelationship => "read_relationship",
            Self::ReadEvent => "read_event",
            Self::SubmitEvent => "submit_event",
            Self::ModifySchema => "modify_schema",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = holon_core::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| holon_core::Error::parse("operation", s))
    }
}
