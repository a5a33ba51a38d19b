//! CLI configuration.
//!
//! The configuration file is optional. When it is absent every field takes
//! its default, so `holon` works out of the box with the built-in policy.

use std::path::{Path, PathBuf};

use holon_acl::AccessPolicy;
use holon_core::Error as CoreError;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Directory name under the platform config dir.
pub const PROJECT_NAME: &str = "holon";

/// Settings read from `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HolonConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Policy file. The built-in policy applies when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_path: Option<PathBuf>,
}

impl Default for HolonConfig {
    fn default() -> Self {
        Self {
            log_filter: "warn".to_string(),
            policy_path: None,
        }
    }
}

impl HolonConfig {
    /// Default location: `<config dir>/holon/config.toml`.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(PROJECT_NAME).join("config.toml"))
    }

    /// An explicit path wins over the default location.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(PathBuf::from(path)),
            None => Self::default_config_path(),
        }
    }

    /// Loads the configuration, falling back to defaults when no file exists.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        match Self::resolve_config_path(explicit) {
            Some(path) if path.exists() => Self::from_path(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Reads and parses a configuration file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| CoreError::io_with_path(e, path))?;
        toml::from_str(&content).map_err(|e| {
            Error::from(CoreError::config(format!(
                "Failed to parse {}: {e}",
                path.display()
            )))
        })
    }

    /// Renders the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Loads the access policy, preferring `override_path` over the
    /// configured one.
    pub fn load_policy(&self, override_path: Option<&Path>) -> Result<AccessPolicy> {
        match override_path.or(self.policy_path.as_deref()) {
            Some(path) => Ok(AccessPolicy::from_path(path)?),
            None => Ok(AccessPolicy::default()),
        }
    }
}
