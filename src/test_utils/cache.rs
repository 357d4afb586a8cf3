//! In-memory artifact cache for exercising the parent-reference check.

use crate::core::{ProjectUtilError, Result};
use crate::descriptor::Identity;
use crate::repository::{ArtifactCache, ProjectBuilder, ProjectModel};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// An [`ArtifactCache`] that records installs in memory and counts calls.
#[derive(Debug, Default)]
pub struct InMemoryCache {
    location: PathBuf,
    installed: RefCell<HashMap<Identity, PathBuf>>,
    resolve_calls: Cell<usize>,
    install_calls: Cell<usize>,
    resolve_failure: Option<String>,
    install_failure: Option<String>,
}

impl InMemoryCache {
    /// An empty cache that reports `location` as its root
    pub fn new(location: impl Into<PathBuf>) -> Self {
        Self {
            location: location.into(),
            ..Self::default()
        }
    }

    /// Pre-install `identity`
    pub fn with_installed(self, identity: Identity) -> Self {
        let path = self.location.join(format!("{}.pom", identity.artifact()));
        self.installed.borrow_mut().insert(identity, path);
        self
    }

    /// Make every `resolve` fail with `reason`
    pub fn failing_resolve(mut self, reason: &str) -> Self {
        self.resolve_failure = Some(reason.to_string());
        self
    }

    /// Make every `install` fail with `reason`
    pub fn failing_install(mut self, reason: &str) -> Self {
        self.install_failure = Some(reason.to_string());
        self
    }

    /// Whether `identity` is installed
    pub fn contains(&self, identity: &Identity) -> bool {
        self.installed.borrow().contains_key(identity)
    }

    /// Number of `resolve` calls so far
    pub fn resolve_calls(&self) -> usize {
        self.resolve_calls.get()
    }

    /// Number of `install` calls so far
    pub fn install_calls(&self) -> usize {
        self.install_calls.get()
    }
}

impl ArtifactCache for InMemoryCache {
    fn location(&self) -> &Path {
        &self.location
    }

    fn resolve(&self, identity: &Identity) -> Result<Option<PathBuf>> {
        self.resolve_calls.set(self.resolve_calls.get() + 1);
        if let Some(reason) = &self.resolve_failure {
            return Err(ProjectUtilError::Resolution {
                identity: identity.to_string(),
                reason: reason.clone(),
            });
        }
        Ok(self.installed.borrow().get(identity).cloned())
    }

    fn install(&self, model: &ProjectModel) -> Result<PathBuf> {
        self.install_calls.set(self.install_calls.get() + 1);
        if let Some(reason) = &self.install_failure {
            return Err(ProjectUtilError::Other {
                message: reason.clone(),
            });
        }
        let path = self.location.join(format!("{}.pom", model.identity().artifact()));
        self.installed.borrow_mut().insert(model.identity().clone(), path.clone());
        Ok(path)
    }
}

/// A [`ProjectBuilder`] that always fails
#[derive(Debug, Clone)]
pub struct FailingBuilder {
    pub reason: String,
}

impl ProjectBuilder for FailingBuilder {
    fn build(&self, descriptor: &Path) -> Result<ProjectModel> {
        Err(ProjectUtilError::DescriptorParse {
            path: descriptor.display().to_string(),
            reason: self.reason.clone(),
        })
    }
}
