//! Artifact identity tuple.

use std::fmt;

/// Packaging of every identity read from a build descriptor.
pub const PACKAGING: &str = "pom";

/// The `(group, artifact, version)` tuple that names a descriptor artifact.
///
/// Values are kept exactly as they appear in the descriptor. When an
/// identity is read from a child's parent reference, `version` may be a
/// version range rather than a single version.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity {
    group: String,
    artifact: String,
    version: String,
}

impl Identity {
    /// Create an identity from its three components.
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version: version.into(),
        }
    }

    /// Group identifier (`groupId`).
    #[must_use]
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Artifact identifier (`artifactId`).
    #[must_use]
    pub fn artifact(&self) -> &str {
        &self.artifact
    }

    /// Version text, or version range for a parent reference.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Always [`PACKAGING`].
    #[must_use]
    pub const fn packaging(&self) -> &'static str {
        PACKAGING
    }

    /// Whether both identities name the same artifact, ignoring version.
    ///
    /// Comparison is exact and case-sensitive.
    #[must_use]
    pub fn same_name(&self, other: &Self) -> bool {
        self.group == other.group && self.artifact == other.artifact
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}:{}", self.group, self.artifact, PACKAGING, self.version)
    }
}
