//! # holon-cli
//!
//! Operator CLI for Holon access control.
//!
//! This crate provides the pieces behind the `holon` binary:
//! - Scenario files describing documents, entities and users
//! - Decision reports and filtered views for one user
//! - Policy review and CLI configuration management

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod scenario;

pub use config::HolonConfig;
pub use error::{Error, Result};
pub use scenario::{LoadedScenario, Scenario};
