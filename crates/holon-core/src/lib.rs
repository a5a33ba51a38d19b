//! Holon Core — shared types, ids, and errors.
//!
//! This crate provides the foundational types used across all Holon crates.
//! It has no internal Holon dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`classification`]: The ordered [`ClassificationLevel`] and its label parser
//! - [`role`]: User roles
//! - [`user`]: The per-request [`UserContext`]
//! - [`ids`]: Document and entity identifiers
//! - [`entity`]: Holons, relationships, events and the [`Provenance`] trait

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod classification;
pub mod entity;
pub mod error;
pub mod ids;
pub mod role;
pub mod user;

mod proptests;

// Re-export key types at crate root for convenience
pub use classification::ClassificationLevel;
pub use entity::{
    EntityKind, EntityStatus, Event, Holon, HolonType, Properties, Provenance, Relationship,
};
pub use error::{Error, Result};
pub use ids::{DocumentId, EntityId};
pub use role::Role;
pub use user::UserContext;
