//! Command-line interface for project-util.
//!
//! Each subcommand is one build-pipeline check. A check that passes exits
//! with status 0; any failure is rendered by `main` and exits with status 1.
//!
//! # Commands
//!
//! - `check-version` - Require a version to lie within a version range
//! - `check-parent-pom` - Require a child descriptor to reference a parent
//!   descriptor, installing the parent into the local repository if needed
//! - `gen-cksum` - Print the checksum of a file
//! - `verify-file` - Verify a file against a published checksum, optionally
//!   replacing it from a reference copy
//!
//! # Global Options
//!
//! - `--verbose` / `-v` - Debug logging
//! - `--quiet` / `-q` - Errors only
//! - `--config` / `-c` - Configuration file
//! - `--dev-mode` - Skip descriptor and repository existence checks
//! - `--timeout` - Fetch timeout in seconds
//!
//! `RUST_LOG`, when set, takes precedence over `--verbose` and `--quiet`.
//!
//! # Examples
//!
//! ```bash
//! project-util check-version --range "[0.3,0.4)" --version 0.3.7
//! project-util check-parent-pom --parent-path stack/pom.xml --child-path app/pom.xml
//! project-util gen-cksum --file-path target/app.jar
//! project-util verify-file --file-path target/app.jar \
//!     --cksum-url https://example.com/app.jar.md5 \
//!     --ref-url https://example.com/app.jar --replace-on-fail
//! ```

mod check_parent;
mod check_version;
mod gen_cksum;
mod verify_file;


use crate::config::{EnvSnapshot, Settings, SettingsOverrides};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Runtime configuration derived from global flags.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log filter used when `RUST_LOG` is not set
    pub log_level: String,

    /// Command-line settings overrides
    pub overrides: SettingsOverrides,
}

impl CliConfig {
    /// Install the stderr log subscriber. Later calls are no-ops.
    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.log_level));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }

    /// Resolve settings from the overrides, the environment and the config file.
    ///
    /// # Errors
    ///
    /// Invalid environment values or an unreadable or invalid config file.
    pub async fn settings(&self) -> Result<Settings> {
        let env = EnvSnapshot::capture();
        Ok(Settings::load(&self.overrides, &env).await?)
    }
}

/// Build-pipeline consistency checks.
#[derive(Parser)]
#[command(
    name = "project-util",
    about = "Build-pipeline consistency checks",
    version,
    long_about = "Checks version ranges, parent descriptor references and file integrity for build pipelines."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to the configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Skip existence checks for descriptors and the local repository
    #[arg(long, global = true)]
    dev_mode: bool,

    /// Timeout in seconds for fetching checksums and reference copies
    #[arg(long, global = true, value_name = "SECS")]
    timeout: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Require a version to lie within a version range
    CheckVersion(check_version::CheckVersionCommand),

    /// Require a child descriptor to reference a parent descriptor
    CheckParentPom(check_parent::CheckParentPomCommand),

    /// Print the MD5 checksum of a file
    GenCksum(gen_cksum::GenCksumCommand),

    /// Verify a file against a published checksum
    VerifyFile(verify_file::VerifyFileCommand),
}

impl Cli {
    /// Initialise logging, resolve settings and run the selected command.
    ///
    /// # Errors
    ///
    /// Any settings or command failure.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        config.init_logging();
        self.execute_with_config(config).await
    }

    /// Translate global flags (and command-specific setting flags) into a
    /// [`CliConfig`].
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "info"
        };

        let local_repository = match &self.command {
            Commands::CheckParentPom(cmd) => cmd.repo_local.clone(),
            _ => None,
        };

        CliConfig {
            log_level: log_level.to_string(),
            overrides: SettingsOverrides {
                dev_mode: self.dev_mode,
                local_repository,
                fetch_timeout_secs: self.timeout,
                config_path: self.config.clone(),
            },
        }
    }

    /// Run the selected command with an already-built configuration.
    ///
    /// # Errors
    ///
    /// Any command failure. Settings are only resolved, and can only fail,
    /// for commands that use them.
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        match self.command {
            Commands::CheckVersion(cmd) => cmd.execute(),
            Commands::GenCksum(cmd) => cmd.execute().await,
            Commands::CheckParentPom(cmd) => cmd.execute(&config.settings().await?),
            Commands::VerifyFile(cmd) => cmd.execute(&config.settings().await?).await,
        }
    }
}
