//! The access control engine.
//!
//! Every decision is a pure function of the user, the entity, the policy,
//! and the registry state at call time. Decisions compose two gates:
//!
//! 1. Role gate: some role held by the user is permitted the operation.
//! 2. Clearance gate: for clearance-gated kinds, the user's clearance is at
//!    least the entity's required level, unless a held role bypasses it.
//!
//! The kind-specific `can_access_*` functions log denials under the
//! `holon_acl::audit` target. The `filter_*` functions evaluate the same
//! gates without logging, so nothing observable depends on what was removed.

use std::fmt;
use std::sync::Arc;

use holon_core::{ClassificationLevel, Event, Holon, Provenance, Relationship, UserContext};
use holon_docs::{ClassificationSource, DocumentRegistry};

use crate::decision::{AccessDecision, Denial};
use crate::operation::Operation;
use crate::policy::AccessPolicy;

const AUDIT_TARGET: &str = "holon_acl::audit";

/// Role and clearance based access control over a classification source.
pub struct AccessControlEngine<S: ClassificationSource = DocumentRegistry> {
    source: Arc<S>,
    policy: AccessPolicy,
}

impl<S: ClassificationSource> AccessControlEngine<S> {
    /// Creates an engine with the default policy.
    pub fn new(source: Arc<S>) -> Self {
        Self::with_policy(source, AccessPolicy::default())
    }

    /// Creates an engine with an explicit policy.
    pub fn with_policy(source: Arc<S>, policy: AccessPolicy) -> Self {
        Self { source, policy }
    }

    /// The policy in force.
    pub fn policy(&self) -> &AccessPolicy {
        &self.policy
    }

    /// The classification source decisions resolve documents against.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Highest classification among the entity's source documents.
    ///
    /// Unresolvable references contribute `Unclassified`; an entity with no
    /// source documents requires `Unclassified`.
    pub fn required_level<E: Provenance + ?Sized>(&self, entity: &E) -> ClassificationLevel {
        entity
            .source_documents()
            .iter()
            .map(|id| self.source.resolve_classification(id))
            .max()
            .unwrap_or_default()
    }

    // ------------------------------------------------------------------------
    // Entity reads
    // ------------------------------------------------------------------------

    /// Whether `user` may read `entity`, for any entity kind.
    pub fn can_access<E: Provenance + ?Sized>(
        &self,
        user: &UserContext,
        entity: &E,
    ) -> AccessDecision {
        let outcome = self.evaluate(user, entity);
        if let Err(denial) = &outcome {
            log::debug!(
                target: AUDIT_TARGET,
                "deny {} {} to user {}: {denial}",
                Operation::read(entity.kind()),
                entity.entity_id(),
                user.user_id
            );
        }
        AccessDecision::from_outcome(outcome)
    }

    /// Whether `user` may read `holon`.
    pub fn can_access_holon(&self, user: &UserContext, holon: &Holon) -> AccessDecision {
        self.can_access(user, holon)
    }

    /// Whether `user` may read `relationship`.
    pub fn can_access_relationship(
        &self,
        user: &UserContext,
        relationship: &Relationship,
    ) -> AccessDecision {
        self.can_access(user, relationship)
    }

    /// Whether `user` may read `event`.
    pub fn can_access_event(&self, user: &UserContext, event: &Event) -> AccessDecision {
        self.can_access(user, event)
    }

    // ------------------------------------------------------------------------
    // Permission-only operations
    // ------------------------------------------------------------------------

    /// Whether `user` may perform `operation`, ignoring clearance.
    pub fn can_perform(&self, user: &UserContext, operation: Operation) -> AccessDecision {
        let outcome = self.check_role(user, operation);
        if let Err(denial) = &outcome {
            log::debug!(
                target: AUDIT_TARGET,
                "deny {operation} to user {}: {denial}",
                user.user_id
            );
        }
        AccessDecision::from_outcome(outcome)
    }

    /// Whether `user` may append events to the log.
    pub fn can_submit_event(&self, user: &UserContext) -> AccessDecision {
        self.can_perform(user, Operation::SubmitEvent)
    }

    /// Whether `user` may change type definitions.
    pub fn can_modify_schema(&self, user: &UserContext) -> AccessDecision {
        self.can_perform(user, Operation::ModifySchema)
    }

    // ------------------------------------------------------------------------
    // Filtering
    // ------------------------------------------------------------------------

    /// The items `user` may read, in their original order.
    pub fn filter<'a, E, I>(&self, user: &UserContext, items: I) -> Vec<&'a E>
    where
        E: Provenance + 'a,
        I: IntoIterator<Item = &'a E>,
    {
        items
            .into_iter()
            .filter(|item| self.evaluate(user, *item).is_ok())
            .collect()
    }

    /// The holons `user` may read, in their original order.
    pub fn filter_holons<'a>(&self, user: &UserContext, holons: &'a [Holon]) -> Vec<&'a Holon> {
        self.filter(user, holons)
    }

    /// The relationships `user` may read, in their original order.
    pub fn filter_relationships<'a>(
        &self,
        user: &UserContext,
        relationships: &'a [Relationship],
    ) -> Vec<&'a Relationship> {
        self.filter(user, relationships)
    }

    /// The events `user` may read, in their original order.
    pub fn filter_events<'a>(&self, user: &UserContext, events: &'a [Event]) -> Vec<&'a Event> {
        self.filter(user, events)
    }

    // ------------------------------------------------------------------------
    // Gates
    // ------------------------------------------------------------------------

    fn check_role(&self, user: &UserContext, operation: Operation) -> Result<(), Denial> {
        if user.has_no_roles() {
            return Err(Denial::NoRoles);
        }
        if self.policy.permits_any(&user.roles, operation) {
            Ok(())
        } else {
            Err(Denial::NotPermitted { operation })
        }
    }

    fn evaluate<E: Provenance + ?Sized>(
        &self,
        user: &UserContext,
        entity: &E,
    ) -> Result<(), Denial> {
        let kind = entity.kind();
        self.check_role(user, Operation::read(kind))?;

        if !self.policy.requires_clearance(kind) || self.policy.bypasses_clearance(&user.roles) {
            return Ok(());
        }

        let required = self.required_level(entity);
        if user.clearance_level >= required {
            Ok(())
        } else {
            Err(Denial::InsufficientClearance {
                kind,
                required,
                held: user.clearance_level,
            })
        }
    }
}

impl<S: ClassificationSource> Clone for AccessControlEngine<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            policy: self.policy.clone(),
        }
    }
}

impl<S: ClassificationSource> fmt::Debug for AccessControlEngine<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessControlEngine")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
