//! Optional TOML configuration file.
//!
//! # Location
//!
//! - `--config <FILE>` or `PROJECT_UTIL_CONFIG`, which must exist
//! - otherwise `~/.project-util/config.toml`, used only if present
//!
//! # Format
//!
//! ```toml
//! dev_mode = false
//! local_repository = "/opt/maven/repository"
//! fetch_timeout_secs = 60
//! ```

use crate::core::{ProjectUtilError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Contents of the configuration file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Skip existence checks on descriptors and the repository
    pub dev_mode: Option<bool>,
    /// Local artifact repository location
    pub local_repository: Option<PathBuf>,
    /// Timeout for fetching checksums and reference copies
    pub fetch_timeout_secs: Option<u64>,
}

impl ConfigFile {
    /// `~/.project-util/config.toml`
    ///
    /// # Errors
    ///
    /// [`ProjectUtilError::ConfigError`] if the home directory is unknown.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| ProjectUtilError::ConfigError {
            message: "Unable to determine home directory".to_string(),
        })?;
        Ok(home.join(".project-util").join("config.toml"))
    }

    /// Load the explicit file if one is given, otherwise the default file if
    /// it exists, otherwise an empty configuration.
    ///
    /// # Errors
    ///
    /// Fails if an explicit file is missing, or if the chosen file cannot be
    /// read or parsed.
    pub async fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path).await;
        }

        match Self::default_path() {
            Ok(path) if path.is_file() => Self::load_from(&path).await,
            _ => Ok(Self::default()),
        }
    }

    /// Load a specific file.
    ///
    /// # Errors
    ///
    /// [`ProjectUtilError::ConfigError`] if the file cannot be read,
    /// [`ProjectUtilError::TomlError`] if it is not valid for this schema.
    pub async fn load_from(path: &Path) -> Result<Self> {
        debug!("Loading config from {}", path.display());
        let content =
            fs::read_to_string(path).await.map_err(|e| ProjectUtilError::ConfigError {
                message: format!("Failed to read config file {}: {e}", path.display()),
            })?;

        Ok(toml::from_str(&content)?)
    }
}
