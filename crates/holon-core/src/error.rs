//! Error types for holon-core.

use std::path::{Path, PathBuf};

/// Result type alias for holon-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors shared by the Holon crates.
///
/// Access denial is never an error. These variants cover the edges around
/// the engine: configuration files, parsing of names, and caller contract
/// violations rejected before data reaches a decision.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// I/O error on a specific path
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A name could not be parsed into a known value
    #[error("Unknown {what}: '{value}'")]
    Parse {
        /// Kind of value being parsed (e.g. "role")
        what: &'static str,
        /// The rejected input
        value: String,
    },

    /// Record validation error
    #[error("Validation error: {message}")]
    Validation {
        /// Field that failed validation
        field: Option<String>,
        /// What went wrong
        message: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates an I/O error tagged with the path it occurred on.
    pub fn io_with_path(source: std::io::Error, path: &Path) -> Self {
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Creates a parse error for an unrecognised name.
    pub fn parse<S: Into<String>>(what: &'static str, value: S) -> Self {
        Error::Parse {
            what,
            value: value.into(),
        }
    }

    /// Creates a new validation error.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Error::Validation {
            field: None,
            message: message.into(),
        }
    }

    /// Creates a new validation error with a field name.
    pub fn validation_field<F, M>(field: F, message: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        Error::Validation {
            field: Some(field.into()),
            message: message.into(),
        }
    }
}
