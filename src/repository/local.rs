//! Repository on the local file system.

use super::{ArtifactCache, ProjectBuilder, ProjectModel};
use crate::core::{ProjectUtilError, Result};
use crate::descriptor::{DescriptorReader, Identity, PACKAGING};
use crate::utils::fs::atomic_write;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A local artifact repository with the conventional layout:
///
/// ```text
/// <root>/<group with '.' as '/'>/<artifact>/<version>/<artifact>-<version>.pom
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalRepository {
    root: PathBuf,
}

impl LocalRepository {
    /// Create a repository rooted at `root`. The directory is not created.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
        }
    }

    /// Where the descriptor for `identity` lives in this repository.
    ///
    /// Coordinates are trimmed first, so a descriptor that pads its values
    /// with whitespace maps to the same location as an unpadded one.
    ///
    /// # Errors
    ///
    /// [`ProjectUtilError::Resolution`] if a component of the identity cannot
    /// be used as a path segment (empty, `.`, `..`, or containing a path
    /// separator).
    pub fn artifact_path(&self, identity: &Identity) -> Result<PathBuf> {
        let invalid = |reason: String| ProjectUtilError::Resolution {
            identity: identity.to_string(),
            reason,
        };

        let artifact = identity.artifact().trim();
        let version = identity.version().trim();

        let mut path = self.root.clone();
        for segment in identity.group().trim().split('.') {
            check_segment(segment).map_err(|r| invalid(format!("group: {r}")))?;
            path.push(segment);
        }
        check_segment(artifact).map_err(|r| invalid(format!("artifact: {r}")))?;
        check_segment(version).map_err(|r| invalid(format!("version: {r}")))?;

        path.push(artifact);
        path.push(version);
        path.push(format!("{artifact}-{version}.{PACKAGING}"));
        Ok(path)
    }
}

fn check_segment(segment: &str) -> std::result::Result<(), String> {
    if segment.is_empty() {
        return Err("empty path segment".to_string());
    }
    if segment == "." || segment == ".." {
        return Err(format!("'{segment}' is not allowed"));
    }
    if segment.contains(['/', '\\', '\0']) || segment.chars().any(char::is_control) {
        return Err(format!("'{}' contains a path separator or control character", segment.escape_debug()));
    }
    Ok(())
}

impl ArtifactCache for LocalRepository {
    fn location(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, identity: &Identity) -> Result<Option<PathBuf>> {
        let path = self.artifact_path(identity)?;
        match fs::metadata(&path) {
            Ok(metadata) if metadata.is_file() => {
                debug!("Resolved {} at {}", identity, path.display());
                Ok(Some(path))
            }
            Ok(_) => Err(ProjectUtilError::Resolution {
                identity: identity.to_string(),
                reason: format!("{} exists but is not a file", path.display()),
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("{} is not installed in {}", identity, self.root.display());
                Ok(None)
            }
            Err(e) => Err(ProjectUtilError::Resolution {
                identity: identity.to_string(),
                reason: format!("{}: {e}", path.display()),
            }),
        }
    }

    fn install(&self, model: &ProjectModel) -> Result<PathBuf> {
        let target = self.artifact_path(model.identity())?;
        let content = fs::read(model.descriptor()).map_err(|e| ProjectUtilError::FileSystemError {
            operation: "read".to_string(),
            path: model.descriptor().display().to_string(),
            reason: e.to_string(),
        })?;

        atomic_write(&target, &content).map_err(|e| ProjectUtilError::FileSystemError {
            operation: "install".to_string(),
            path: target.display().to_string(),
            reason: format!("{e:#}"),
        })?;

        info!("Installed {} to {}", model.identity(), target.display());
        Ok(target)
    }
}

/// Builds project models by reading the descriptor's own identity.
#[derive(Debug, Clone, Copy, Default)]
pub struct DescriptorProjectBuilder {
    reader: DescriptorReader,
}

impl DescriptorProjectBuilder {
    /// Create a builder that reads descriptors with `reader`.
    #[must_use]
    pub const fn new(reader: DescriptorReader) -> Self {
        Self {
            reader,
        }
    }
}

impl ProjectBuilder for DescriptorProjectBuilder {
    fn build(&self, descriptor: &Path) -> Result<ProjectModel> {
        let identity = self.reader.read_identity(descriptor)?;
        Ok(ProjectModel::new(identity, descriptor))
    }
}
