//! project-util - build-pipeline consistency checks
//!
//! Small, stateless checks a build orchestrator (a CI job, a Makefile, a
//! stack's build script) runs between build steps:
//!
//! - does a version satisfy a version range?
//! - does an application's descriptor reference the right parent descriptor,
//!   and is that parent available in the local artifact repository?
//! - does a file on disk match the checksum published for it, and if not,
//!   can it be restored from a reference copy?
//!
//! # Core Modules
//!
//! ## Checks
//! - [`version`] - Version parsing and range containment
//! - [`descriptor`] - Identity extraction from XML build descriptors
//! - [`parent`] - Parent-reference consistency check
//! - [`integrity`] - Checksums, fetching, and the verify-or-repair task
//!
//! ## Collaborators
//! - [`repository`] - Artifact cache and project builder traits, with a local
//!   file-system implementation
//!
//! ## Supporting Modules
//! - [`cli`] - Command-line interface
//! - [`config`] - Settings from flags, environment and config file
//! - [`core`] - Error types and user-facing error rendering
//! - [`utils`] - File system helpers
//!
//! # Command-Line Usage
//!
//! ```bash
//! # Fails with "Invalid version: '0.4' for spec: '[0.3,0.4)'"
//! project-util check-version --range "[0.3,0.4)" --version 0.4
//!
//! # Installs the stack parent into ~/.m2/repository if needed
//! project-util check-parent-pom --parent-path stack/pom.xml --child-path app/pom.xml
//!
//! # Publish and later verify a checksum
//! project-util gen-cksum --file-path target/app.jar > app.jar.md5
//! project-util verify-file --file-path target/app.jar --cksum-url file:///srv/app.jar.md5
//! ```
//!
//! # Library Usage
//!
//! ```rust,no_run
//! use project_util::descriptor::DescriptorReader;
//! use project_util::parent::ParentReferenceCheck;
//! use project_util::repository::{DescriptorProjectBuilder, LocalRepository};
//! use std::path::Path;
//!
//! # fn example() -> project_util::core::Result<()> {
//! let reader = DescriptorReader::new(false);
//! let report = ParentReferenceCheck::new(
//!     reader,
//!     LocalRepository::new("/var/cache/m2"),
//!     DescriptorProjectBuilder::new(reader),
//! )
//! .run(Path::new("stack/pom.xml"), Path::new("app/pom.xml"))?;
//! println!("{} installed: {}", report.expected, report.installed);
//! # Ok(())
//! # }
//! ```
//!
//! # Environment
//!
//! - `APPSODY_DEV_MODE` - When present, skip descriptor and repository
//!   existence checks
//! - `PROJECT_UTIL_REPO_LOCAL` - Local artifact repository
//! - `PROJECT_UTIL_FETCH_TIMEOUT` - Fetch timeout in seconds
//! - `PROJECT_UTIL_CONFIG` - Configuration file
//! - `RUST_LOG` - Log filter
//! - `NO_COLOR` - Disable coloured output

// Checks
pub mod descriptor;
pub mod integrity;
pub mod parent;
pub mod version;

// Collaborators
pub mod repository;

// Supporting modules
pub mod cli;
pub mod config;
pub mod core;
pub mod utils;

// Test utilities (only compiled in test mode or with test-utils feature)
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
