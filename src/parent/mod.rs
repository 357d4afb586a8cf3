//! Parent descriptor reference check.
//!
//! Confirms that a child descriptor's `<parent>` block refers to a given
//! parent descriptor, and that the parent is available in the local artifact
//! repository (installing it if not). The check runs in order:
//!
//! 1. the repository location must exist (skipped in dev mode)
//! 2. read the parent's own identity
//! 3. resolve it in the repository, installing it when absent
//! 4. read the child's declared parent identity
//! 5. group and artifact must match exactly
//! 6. the declared version, read as a range, must include the parent version
//!
//! # Examples
//!
//! ```rust,no_run
//! use project_util::descriptor::DescriptorReader;
//! use project_util::parent::ParentReferenceCheck;
//! use project_util::repository::{DescriptorProjectBuilder, LocalRepository};
//! use std::path::Path;
//!
//! # fn example() -> project_util::core::Result<()> {
//! let reader = DescriptorReader::new(false);
//! let check = ParentReferenceCheck::new(
//!     reader,
//!     LocalRepository::new("/home/me/.m2/repository"),
//!     DescriptorProjectBuilder::new(reader),
//! );
//! let report = check.run(Path::new("stack/pom.xml"), Path::new("app/pom.xml"))?;
//! println!("{} satisfies {}", report.expected, report.declared);
//! # Ok(())
//! # }
//! ```


use crate::core::{ProjectUtilError, Result};
use crate::descriptor::{DescriptorReader, Identity};
use crate::repository::{ArtifactCache, ProjectBuilder};
use crate::utils::fs::is_directory;
use crate::version;
use std::path::Path;
use tracing::{debug, info};

/// What a successful check found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentReferenceReport {
    /// Identity of the parent descriptor
    pub expected: Identity,
    /// Parent identity declared by the child; `version` may be a range
    pub declared: Identity,
    /// Whether the parent had to be installed into the repository
    pub installed: bool,
}

/// Checks a child's parent reference against a parent descriptor.
pub struct ParentReferenceCheck<C, B> {
    reader: DescriptorReader,
    cache: C,
    builder: B,
}

impl<C: ArtifactCache, B: ProjectBuilder> ParentReferenceCheck<C, B> {
    /// Create a check. The reader's dev mode also governs the repository
    /// location check.
    pub fn new(reader: DescriptorReader, cache: C, builder: B) -> Self {
        Self {
            reader,
            cache,
            builder,
        }
    }

    /// Run the check for `parent` and `child` descriptor files.
    ///
    /// # Errors
    ///
    /// - [`ProjectUtilError::MissingCache`] when the repository location is
    ///   not a directory
    /// - descriptor errors from [`DescriptorReader`]
    /// - resolution errors from the cache, unchanged
    /// - [`ProjectUtilError::Install`] when building or installing fails
    /// - [`ProjectUtilError::IdentityMismatch`] or
    ///   [`ProjectUtilError::VersionMismatch`] when the reference is wrong
    /// - version or range parse errors for malformed versions
    pub fn run(&self, parent: &Path, child: &Path) -> Result<ParentReferenceReport> {
        self.verify_cache_location()?;

        let expected = self.reader.read_identity(parent)?;
        debug!("Required parent: {}", expected);

        let installed = self.ensure_installed(parent, &expected)?;

        let declared = self.reader.read_parent_identity(child)?;
        debug!("Declared parent in {}: {}", child.display(), declared);

        if !expected.same_name(&declared) {
            return Err(ProjectUtilError::IdentityMismatch {
                expected_group: expected.group().to_string(),
                expected_artifact: expected.artifact().to_string(),
                expected_version: expected.version().to_string(),
                found_group: declared.group().to_string(),
                found_artifact: declared.artifact().to_string(),
            });
        }

        if !version::matches(expected.version(), declared.version())? {
            return Err(ProjectUtilError::VersionMismatch {
                group: expected.group().to_string(),
                artifact: expected.artifact().to_string(),
                expected_version: expected.version().to_string(),
                declared_range: declared.version().to_string(),
            });
        }

        info!("Parent reference in {} matches {}", child.display(), expected);
        Ok(ParentReferenceReport {
            expected,
            declared,
            installed,
        })
    }

    fn verify_cache_location(&self) -> Result<()> {
        let location = self.cache.location();
        if is_directory(location, self.reader.dev_mode()) {
            Ok(())
        } else {
            Err(ProjectUtilError::MissingCache {
                path: location.display().to_string(),
            })
        }
    }

    /// Resolve `expected`, installing `parent` on a miss. Returns whether an
    /// install happened.
    fn ensure_installed(&self, parent: &Path, expected: &Identity) -> Result<bool> {
        if let Some(path) = self.cache.resolve(expected)? {
            debug!("{} already installed at {}", expected, path.display());
            return Ok(false);
        }

        info!("Installing {} into {}", expected, self.cache.location().display());
        let installed = self
            .builder
            .build(parent)
            .and_then(|model| self.cache.install(&model))
            .map_err(|e| ProjectUtilError::Install {
                descriptor: parent.display().to_string(),
                repository: self.cache.location().display().to_string(),
                reason: e.to_string(),
            })?;
        debug!("Installed {} at {}", expected, installed.display());
        Ok(true)
    }
}
