//! Declarative access policy.
//!
//! An [`AccessPolicy`] is two tables plus a bypass set:
//! - the permission matrix, listing the roles allowed each [`Operation`]
//! - a per-[`EntityKind`] flag saying whether reads are clearance-gated
//! - the roles that skip the clearance gate
//!
//! The default policy:
//!
//! | Operation | Administrator | Operator | Analyst | Viewer | SchemaManager |
//! |---|---|---|---|---|---|
//! | read_holon | ✔ | ✔ | ✔ | ✔ | ✔ |
//! | read_relationship | ✔ | ✔ | ✔ | ✔ | ✔ |
//! | read_event | ✔ | ✔ | ✔ | | ✔ |
//! | submit_event | ✔ | ✔ | | | |
//! | modify_schema | ✔ | | | | ✔ |
//!
//! All kinds are clearance-gated and `administrator` bypasses the gate.
//!
//! Policies round-trip through TOML so they can be reviewed and versioned:
//!
//! ```toml
//! clearance_bypass = ["administrator"]
//!
//! [permissions]
//! read_holon = ["administrator", "operator", "analyst", "viewer", "schema_manager"]
//! read_event = ["administrator", "operator", "analyst", "schema_manager"]
//! submit_event = ["administrator", "operator"]
//!
//! [clearance]
//! event = true
//! ```
//!
//! A section left out of the file keeps its default. Inside a present
//! `[permissions]` table, an operation left out permits no role. Inside a
//! present `[clearance]` table, a kind left out stays clearance-gated.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use holon_core::{EntityKind, Role};

use crate::operation::Operation;
use crate::{Error, Result};

// ============================================================================
// AccessPolicy
// ============================================================================

/// Permission matrix and clearance rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessPolicy {
    permissions: BTreeMap<Operation, BTreeSet<Role>>,
    clearance_checks: BTreeMap<EntityKind, bool>,
    clearance_bypass: BTreeSet<Role>,
}

impl Default for AccessPolicy {
    fn default() -> Self {
        use Role::*;

        let permissions = [
            (
                Operation::ReadHolon,
                vec![Administrator, Operator, Analyst, Viewer, SchemaManager],
            ),
            (
                Operation::ReadRelationship,
                vec![Administrator, Operator, Analyst, Viewer, SchemaManager],
            ),
            (
                Operation::ReadEvent,
                vec![Administrator, Operator, Analyst, SchemaManager],
            ),
            (Operation::SubmitEvent, vec![Administrator, Operator]),
            (Operation::ModifySchema, vec![Administrator, SchemaManager]),
        ]
        .into_iter()
        .map(|(op, roles)| (op, roles.into_iter().collect()))
        .collect();

        Self {
            permissions,
            clearance_checks: EntityKind::ALL.into_iter().map(|k| (k, true)).collect(),
            clearance_bypass: BTreeSet::from([Administrator]),
        }
    }
}

impl AccessPolicy {
    /// A policy that permits nothing and gates every kind on clearance.
    pub fn deny_all() -> Self {
        Self {
            permissions: BTreeMap::new(),
            clearance_checks: EntityKind::ALL.into_iter().map(|k| (k, true)).collect(),
            clearance_bypass: BTreeSet::new(),
        }
    }

    /// Whether `role` may perform `operation`.
    pub fn permits(&self, role: Role, operation: Operation) -> bool {
        self.permissions
            .get(&operation)
            .is_some_and(|roles| roles.contains(&role))
    }

    /// Whether any of `roles` may perform `operation`.
    pub fn permits_any(&self, roles: &BTreeSet<Role>, operation: Operation) -> bool {
        self.permissions
            .get(&operation)
            .is_some_and(|allowed| !allowed.is_disjoint(roles))
    }

    /// Roles allowed to perform `operation`.
    pub fn roles_for(&self, operation: Operation) -> impl Iterator<Item = Role> + '_ {
        self.permissions
            .get(&operation)
            .into_iter()
            .flat_map(|roles| roles.iter().copied())
    }

    /// Whether reads of `kind` are clearance-gated.
    pub fn requires_clearance(&self, kind: EntityKind) -> bool {
        self.clearance_checks.get(&kind).copied().unwrap_or(true)
    }

    /// Whether any of `roles` skips the clearance gate.
    pub fn bypasses_clearance(&self, roles: &BTreeSet<Role>) -> bool {
        !self.clearance_bypass.is_disjoint(roles)
    }

    /// Grants `operation` to `role`.
    pub fn allow(mut self, operation: Operation, role: Role) -> Self {
        self.permissions.entry(operation).or_default().insert(role);
        self
    }

    /// Withdraws `operation` from `role`.
    pub fn revoke(mut self, operation: Operation, role: Role) -> Self {
        if let Some(roles) = self.permissions.get_mut(&operation) {
            roles.remove(&role);
        }
        self
    }

    /// Turns the clearance gate on or off for `kind`.
    pub fn with_clearance_check(mut self, kind: EntityKind, required: bool) -> Self {
        self.clearance_checks.insert(kind, required);
        self
    }

    /// Lets `role` skip the clearance gate.
    pub fn with_clearance_bypass(mut self, role: Role) -> Self {
        self.clearance_bypass.insert(role);
        self
    }

    /// Removes `role` from the clearance bypass set.
    pub fn without_clearance_bypass(mut self, role: Role) -> Self {
        self.clearance_bypass.remove(&role);
        self
    }

    /// Parses a policy from TOML.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let file: PolicyFile = toml::from_str(s)?;
        file.try_into()
    }

    /// Loads a policy from a TOML file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| holon_core::Error::io_with_path(e, path))?;
        let policy = Self::from_toml_str(&content)?;
        log::info!("Loaded access policy from {}", path.display());
        Ok(policy)
    }

    /// Renders the policy as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(&PolicyFile::from(self))?)
    }
}

// ============================================================================
// File format
// ============================================================================

/// On-disk shape. Keys are plain strings so unknown names can be reported.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct PolicyFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    clearance_bypass: Option<BTreeSet<Role>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    permissions: Option<BTreeMap<String, BTreeSet<Role>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    clearance: Option<BTreeMap<String, bool>>,
}

impl TryFrom<PolicyFile> for AccessPolicy {
    type Error = Error;

    fn try_from(file: PolicyFile) -> Result<Self> {
        let mut policy = AccessPolicy::default();

        if let Some(bypass) = file.clearance_bypass {
            policy.clearance_bypass = bypass;
        }

        if let Some(table) = file.permissions {
            policy.permissions = table
                .into_iter()
                .map(|(name, roles)| -> Result<(Operation, BTreeSet<Role>)> {
                    Ok((name.parse::<Operation>()?, roles))
                })
                .collect::<Result<_>>()?;
        }

        if let Some(table) = file.clearance {
            for (name, required) in table {
                let kind = parse_kind(&name)?;
                policy.clearance_checks.insert(kind, required);
            }
        }

        Ok(policy)
    }
}

impl From<&AccessPolicy> for PolicyFile {
    fn from(policy: &AccessPolicy) -> Self {
        Self {
            clearance_bypass: Some(policy.clearance_bypass.clone()),
            permissions: Some(
                policy
                    .permissions
                    .iter()
                    .map(|(op, roles)| (op.name().to_string(), roles.clone()))
                    .collect(),
            ),
            clearance: Some(
                EntityKind::ALL
                    .into_iter()
                    .map(|kind| (kind.name().to_string(), policy.requires_clearance(kind)))
                    .collect(),
            ),
        }
    }
}

fn parse_kind(name: &str) -> Result<EntityKind> {
    EntityKind::ALL
        .into_iter()
        .find(|kind| kind.name() == name)
        .ok_or_else(|| holon_core::Error::parse("entity kind", name).into())
}

// ============================================================================
// Tests
// ============================================================================
