//! Error types for holon-docs

use thiserror::Error;

/// Result type alias for holon-docs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in holon-docs
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from holon-core
    #[error("Core error: {0}")]
    Core(#[from] holon_core::Error),
}
