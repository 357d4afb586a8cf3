//! Process environment captured once at startup.

use std::ffi::OsString;
use std::path::PathBuf;

/// Presence of this variable, with any value, turns dev mode on.
pub const DEV_MODE_ENV: &str = "APPSODY_DEV_MODE";
/// Local artifact repository location.
pub const REPO_LOCAL_ENV: &str = "PROJECT_UTIL_REPO_LOCAL";
/// Fetch timeout in seconds.
pub const FETCH_TIMEOUT_ENV: &str = "PROJECT_UTIL_FETCH_TIMEOUT";
/// Path of the configuration file.
pub const CONFIG_PATH_ENV: &str = "PROJECT_UTIL_CONFIG";

/// The environment variables that feed [`Settings`](super::Settings).
///
/// Nothing below the CLI reads the environment directly; components receive
/// the values they need through `Settings`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    /// `APPSODY_DEV_MODE` is set
    pub dev_mode: bool,
    /// `PROJECT_UTIL_REPO_LOCAL`, when set and non-empty
    pub local_repository: Option<PathBuf>,
    /// `PROJECT_UTIL_FETCH_TIMEOUT`, unparsed
    pub fetch_timeout: Option<String>,
    /// `PROJECT_UTIL_CONFIG`, when set and non-empty
    pub config_path: Option<PathBuf>,
}

impl EnvSnapshot {
    /// Read the current process environment.
    #[must_use]
    pub fn capture() -> Self {
        Self::from_lookup(|name| std::env::var_os(name))
    }

    /// Build a snapshot from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<OsString>) -> Self {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.is_empty());

        Self {
            dev_mode: lookup(DEV_MODE_ENV).is_some(),
            local_repository: non_empty(REPO_LOCAL_ENV).map(PathBuf::from),
            fetch_timeout: non_empty(FETCH_TIMEOUT_ENV)
                .map(|value| value.to_string_lossy().into_owned()),
            config_path: non_empty(CONFIG_PATH_ENV).map(PathBuf::from),
        }
    }
}
