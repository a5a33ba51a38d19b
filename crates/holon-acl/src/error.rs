//! Error types for holon-acl

use thiserror::Error;

/// Result type alias for holon-acl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in holon-acl
///
/// Only policy loading can fail. Access decisions never return an error;
/// a denial is an [`AccessDecision`](crate::AccessDecision) value.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from holon-core
    #[error("Core error: {0}")]
    Core(#[from] holon_core::Error),

    /// Policy file is not valid TOML or has the wrong shape
    #[error("Invalid policy: {0}")]
    PolicyParse(#[from] toml::de::Error),

    /// Policy could not be rendered as TOML
    #[error("Failed to render policy: {0}")]
    PolicyRender(#[from] toml::ser::Error),
}
