//! Artifact cache and project model capabilities.
//!
//! The parent-reference check needs two collaborators it does not implement
//! itself: a local artifact cache that can look up and install descriptors by
//! identity, and a builder that turns a descriptor file into an installable
//! project model. Both are traits so the check can run against an in-memory
//! cache in tests and against a real repository from the command line.
//!
//! [`LocalRepository`] and [`DescriptorProjectBuilder`] are the implementations
//! used by the binary.

mod local;

pub use local::{DescriptorProjectBuilder, LocalRepository};

use crate::core::Result;
use crate::descriptor::Identity;
use std::path::{Path, PathBuf};

/// An installable project: its identity and the descriptor that defines it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectModel {
    identity: Identity,
    descriptor: PathBuf,
}

impl ProjectModel {
    /// Create a model for the descriptor at `descriptor`.
    pub fn new(identity: Identity, descriptor: impl Into<PathBuf>) -> Self {
        Self {
            identity,
            descriptor: descriptor.into(),
        }
    }

    /// Identity the project is installed under.
    #[must_use]
    pub const fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Descriptor file the model was built from.
    #[must_use]
    pub fn descriptor(&self) -> &Path {
        &self.descriptor
    }
}

/// A local cache of installed artifacts, keyed by identity.
pub trait ArtifactCache {
    /// Root directory of the cache.
    fn location(&self) -> &Path;

    /// Look up an installed artifact.
    ///
    /// Returns `Ok(None)` when the identity is not installed. Any other
    /// failure is an error and must not be reported as "not installed".
    fn resolve(&self, identity: &Identity) -> Result<Option<PathBuf>>;

    /// Install a project into the cache and return where it was placed.
    fn install(&self, model: &ProjectModel) -> Result<PathBuf>;
}

/// Builds a [`ProjectModel`] from a descriptor file.
pub trait ProjectBuilder {
    /// Build the model for the descriptor at `descriptor`.
    fn build(&self, descriptor: &Path) -> Result<ProjectModel>;
}

impl<T: ArtifactCache + ?Sized> ArtifactCache for &T {
    fn location(&self) -> &Path {
        (**self).location()
    }

    fn resolve(&self, identity: &Identity) -> Result<Option<PathBuf>> {
        (**self).resolve(identity)
    }

    fn install(&self, model: &ProjectModel) -> Result<PathBuf> {
        (**self).install(model)
    }
}

impl<T: ProjectBuilder + ?Sized> ProjectBuilder for &T {
    fn build(&self, descriptor: &Path) -> Result<ProjectModel> {
        (**self).build(descriptor)
    }
}
