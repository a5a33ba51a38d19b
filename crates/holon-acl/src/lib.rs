//! # holon-acl
//!
//! Access control for Holon entities.
//!
//! Decisions combine two independent dimensions:
//! - Role permissions, looked up in a declarative (operation × role) matrix
//! - Clearance gating, where the level an entity requires is the highest
//!   classification among its source documents
//!
//! The [`AccessControlEngine`] exposes one decision function per operation
//! and an order-preserving filter per entity kind. Filters are silent:
//! nothing about removed items is logged or returned.
//!
//! ```rust
//! use std::sync::Arc;
//! use holon_acl::AccessControlEngine;
//! use holon_core::{ClassificationLevel, EntityId, Holon, Role, UserContext};
//! use holon_docs::{DocumentProperties, DocumentRegistry};
//!
//! let registry = Arc::new(DocumentRegistry::new());
//! let order = registry.register_document(
//!     DocumentProperties::new("Operations order", "SECRET"),
//!     EntityId::new("evt-1"),
//! );
//! let holon = Holon::new("h1", "mission").with_source_document(order.id);
//!
//! let engine = AccessControlEngine::new(registry);
//! let analyst = UserContext::new("u1", ClassificationLevel::Unclassified).with_role(Role::Analyst);
//!
//! let decision = engine.can_access_holon(&analyst, &holon);
//! assert!(!decision.allowed);
//! assert!(decision.reason.unwrap().contains("clearance"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod decision;
pub mod engine;
pub mod error;
pub mod operation;
pub mod policy;

mod proptests;

pub use decision::AccessDecision;
pub use engine::AccessControlEngine;
pub use error::{Error, Result};
pub use operation::Operation;
pub use policy::AccessPolicy;
