//! Error types for holon-cli

use thiserror::Error;

/// Result type alias for holon-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in holon-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from holon-core
    #[error("Core error: {0}")]
    Core(#[from] holon_core::Error),

    /// Error from holon-docs
    #[error("Document error: {0}")]
    Docs(#[from] holon_docs::Error),

    /// Error from holon-acl
    #[error("Policy error: {0}")]
    Acl(#[from] holon_acl::Error),

    /// Malformed TOML input
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML rendering failed
    #[error("TOML render error: {0}")]
    TomlRender(#[from] toml::ser::Error),

    /// User id not declared in the scenario
    #[error("Unknown user: '{0}'")]
    UnknownUser(String),

    /// Two scenario documents share a key
    #[error("Duplicate document key: '{0}'")]
    DuplicateDocumentKey(String),
}
