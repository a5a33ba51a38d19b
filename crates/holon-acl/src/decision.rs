//! Access decisions.

use serde::{Deserialize, Serialize};
use std::fmt;

use holon_core::{ClassificationLevel, EntityKind};

use crate::operation::Operation;

/// Outcome of an access check.
///
/// `reason` is set only on denial and is meant for audit logs. Callers
/// must present a denial exactly as they would present "not found".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessDecision {
    /// Whether access is granted.
    pub allowed: bool,
    /// Why access was denied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl AccessDecision {
    /// A grant.
    pub fn allow() -> Self {
        Self {
            allowed: true,
            reason: None,
        }
    }

    /// A denial with an audit reason.
    pub fn deny(reason: impl Into<String>) -> Self {
        Self {
            allowed: false,
            reason: Some(reason.into()),
        }
    }

    /// Whether access is granted.
    pub fn is_allowed(&self) -> bool {
        self.allowed
    }
}

impl fmt::Display for AccessDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.reason, self.allowed) {
            (_, true) => write!(f, "allow"),
            (Some(reason), false) => write!(f, "deny: {reason}"),
            (None, false) => write!(f, "deny"),
        }
    }
}

/// Why the engine refused an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Denial {
    NoRoles,
    NotPermitted {
        operation: Operation,
    },
    InsufficientClearance {
        kind: EntityKind,
        required: ClassificationLevel,
        held: ClassificationLevel,
    },
}

impl fmt::Display for Denial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRoles => write!(f, "user holds no recognized role"),
            Self::NotPermitted { operation } => {
                write!(f, "no role held by the user permits {operation}")
            }
            Self::InsufficientClearance {
                kind,
                required,
                held,
            } => write!(
                f,
                "insufficient clearance: {kind} requires {required}, user holds {held}"
            ),
        }
    }
}

impl AccessDecision {
    pub(crate) fn from_outcome(outcome: std::result::Result<(), Denial>) -> Self {
        match outcome {
            Ok(()) => Self::allow(),
            Err(denial) => Self::deny(denial.to_string()),
        }
    }
}
