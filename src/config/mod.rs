//! Runtime settings.
//!
//! Settings are resolved once per invocation and passed explicitly to the
//! components that need them. Sources, highest precedence first:
//!
//! 1. command-line flags ([`SettingsOverrides`])
//! 2. environment variables ([`EnvSnapshot`])
//! 3. the configuration file ([`ConfigFile`])
//! 4. built-in defaults
//!
//! | Setting | Flag | Environment | Config key | Default |
//! |---------|------|-------------|------------|---------|
//! | dev mode | `--dev-mode` | `APPSODY_DEV_MODE` | `dev_mode` | off |
//! | local repository | `--repo-local` | `PROJECT_UTIL_REPO_LOCAL` | `local_repository` | `~/.m2/repository` |
//! | fetch timeout | `--timeout` | `PROJECT_UTIL_FETCH_TIMEOUT` | `fetch_timeout_secs` | 30 s |
//!
//! Dev mode is on if any source turns it on.

mod env;
mod global;

pub use env::{CONFIG_PATH_ENV, DEV_MODE_ENV, EnvSnapshot, FETCH_TIMEOUT_ENV, REPO_LOCAL_ENV};
pub use global::ConfigFile;

use crate::core::{ProjectUtilError, Result};
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

/// Default fetch timeout
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Values given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    /// `--dev-mode`
    pub dev_mode: bool,
    /// `--repo-local`
    pub local_repository: Option<PathBuf>,
    /// `--timeout`
    pub fetch_timeout_secs: Option<u64>,
    /// `--config`
    pub config_path: Option<PathBuf>,
}

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Skip existence checks on descriptors and the repository location
    pub dev_mode: bool,
    /// Local artifact repository root
    pub local_repository: PathBuf,
    /// Timeout for each fetch
    pub fetch_timeout: Duration,
}

impl Settings {
    /// Load the configuration file and resolve settings from all sources.
    ///
    /// # Errors
    ///
    /// Configuration file errors, plus everything [`Settings::resolve`] reports.
    pub async fn load(overrides: &SettingsOverrides, env: &EnvSnapshot) -> Result<Self> {
        let explicit = overrides.config_path.as_deref().or(env.config_path.as_deref());
        let file = ConfigFile::load(explicit).await?;
        Self::resolve(overrides, env, &file)
    }

    /// Combine already-loaded sources.
    ///
    /// # Errors
    ///
    /// [`ProjectUtilError::ConfigError`] for a malformed or zero timeout, or
    /// when no repository is configured and the home directory is unknown.
    pub fn resolve(
        overrides: &SettingsOverrides,
        env: &EnvSnapshot,
        file: &ConfigFile,
    ) -> Result<Self> {
        let dev_mode = overrides.dev_mode || env.dev_mode || file.dev_mode.unwrap_or(false);

        let local_repository = match overrides
            .local_repository
            .clone()
            .or_else(|| env.local_repository.clone())
            .or_else(|| file.local_repository.clone())
        {
            Some(path) => path,
            None => default_local_repository()?,
        };

        let env_timeout = env
            .fetch_timeout
            .as_deref()
            .map(|raw| {
                raw.trim().parse::<u64>().map_err(|_| ProjectUtilError::ConfigError {
                    message: format!("{FETCH_TIMEOUT_ENV} must be a whole number of seconds, got '{raw}'"),
                })
            })
            .transpose()?;
        let fetch_timeout = match overrides.fetch_timeout_secs.or(env_timeout).or(file.fetch_timeout_secs)
        {
            Some(0) => {
                return Err(ProjectUtilError::ConfigError {
                    message: "fetch timeout must be greater than zero".to_string(),
                });
            }
            Some(secs) => Duration::from_secs(secs),
            None => DEFAULT_FETCH_TIMEOUT,
        };

        let settings = Self {
            dev_mode,
            local_repository,
            fetch_timeout,
        };
        debug!("Resolved settings: {:?}", settings);
        Ok(settings)
    }
}

/// `~/.m2/repository`
///
/// # Errors
///
/// [`ProjectUtilError::ConfigError`] if the home directory is unknown.
pub fn default_local_repository() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| ProjectUtilError::ConfigError {
        message: "Unable to determine home directory".to_string(),
    })?;
    Ok(home.join(".m2").join("repository"))
}
