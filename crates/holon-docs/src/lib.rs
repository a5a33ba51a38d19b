//! # holon-docs
//!
//! Authority document registry for Holon.
//!
//! Documents carry the classification label that decides the clearance an
//! entity derived from them requires. This crate provides:
//! - [`Document`] and [`DocumentProperties`]
//! - [`DocumentRegistry`], the concurrent in-process store
//! - [`ClassificationSource`], the lookup seam the access engine uses

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod document;
pub mod error;
pub mod registry;

mod proptests;

pub use document::{Document, DocumentProperties, EffectiveDates};
pub use error::{Error, Result};
pub use registry::{ClassificationSource, DocumentRegistry};
