//! Build descriptor reading.
//!
//! A build descriptor is an XML document rooted at `<project>`. Two identities
//! can be read from it:
//!
//! | Location | Elements |
//! |----------|----------|
//! | [`IdentityLocation::Own`] | `/project/groupId`, `/project/artifactId`, `/project/version` |
//! | [`IdentityLocation::Parent`] | `/project/parent/groupId`, `/project/parent/artifactId`, `/project/parent/version` |
//!
//! Element names are matched on their local name, so descriptors that declare
//! the usual default namespace read the same as ones that do not. Text is
//! returned verbatim, whitespace included.
//!
//! # Examples
//!
//! ```rust,no_run
//! use project_util::descriptor::DescriptorReader;
//! use std::path::Path;
//!
//! # fn example() -> project_util::core::Result<()> {
//! let reader = DescriptorReader::new(false);
//! let parent = reader.read_identity(Path::new("stack/pom.xml"))?;
//! let declared = reader.read_parent_identity(Path::new("app/pom.xml"))?;
//! println!("{parent} is referenced as {declared}");
//! # Ok(())
//! # }
//! ```

mod identity;


pub use identity::{Identity, PACKAGING};

use crate::core::{ProjectUtilError, Result};
use crate::utils::fs::is_regular_file;
use roxmltree::{Document, Node};
use std::fs;
use std::path::Path;
use tracing::debug;

const ROOT: &str = "project";
const PARENT: &str = "parent";
const GROUP_ID: &str = "groupId";
const ARTIFACT_ID: &str = "artifactId";
const VERSION: &str = "version";

/// Which identity of a descriptor to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityLocation {
    /// The descriptor's own coordinates
    Own,
    /// The coordinates the descriptor declares for its parent
    Parent,
}

impl IdentityLocation {
    fn scope(self) -> &'static [&'static str] {
        match self {
            Self::Own => &[ROOT],
            Self::Parent => &[ROOT, PARENT],
        }
    }

    fn element_path(self, field: &str) -> String {
        let mut path = String::new();
        for segment in self.scope() {
            path.push('/');
            path.push_str(segment);
        }
        path.push('/');
        path.push_str(field);
        path
    }
}

/// Reads identities from build descriptors.
///
/// Every call parses the document afresh; nothing is cached between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct DescriptorReader {
    dev_mode: bool,
}

impl DescriptorReader {
    /// Create a reader. With `dev_mode` on, the file existence check is
    /// skipped and a missing file surfaces as a parse error instead.
    #[must_use]
    pub const fn new(dev_mode: bool) -> Self {
        Self {
            dev_mode,
        }
    }

    /// Whether the existence check is skipped.
    #[must_use]
    pub const fn dev_mode(&self) -> bool {
        self.dev_mode
    }

    /// Read the descriptor's own identity.
    ///
    /// # Errors
    ///
    /// See [`DescriptorReader::read`].
    pub fn read_identity(&self, path: &Path) -> Result<Identity> {
        self.read(path, IdentityLocation::Own)
    }

    /// Read the parent identity the descriptor declares.
    ///
    /// # Errors
    ///
    /// See [`DescriptorReader::read`].
    pub fn read_parent_identity(&self, path: &Path) -> Result<Identity> {
        self.read(path, IdentityLocation::Parent)
    }

    /// Read the identity at `location` from the descriptor at `path`.
    ///
    /// # Errors
    ///
    /// - [`ProjectUtilError::MissingFile`] if `path` is not a regular file
    ///   (not checked in dev mode)
    /// - [`ProjectUtilError::DescriptorParse`] if the file cannot be read or
    ///   is not well-formed XML
    /// - [`ProjectUtilError::MissingElement`] naming the first of the three
    ///   elements that is absent
    pub fn read(&self, path: &Path, location: IdentityLocation) -> Result<Identity> {
        let shown = path.display().to_string();

        if !is_regular_file(path, self.dev_mode) {
            return Err(ProjectUtilError::MissingFile {
                path: shown,
            });
        }

        let text = fs::read_to_string(path).map_err(|e| ProjectUtilError::DescriptorParse {
            path: shown.clone(),
            reason: e.to_string(),
        })?;
        let document = Document::parse(&text).map_err(|e| ProjectUtilError::DescriptorParse {
            path: shown.clone(),
            reason: e.to_string(),
        })?;

        let scope = find_element(document.root(), location.scope());
        let field = |name: &str| {
            scope
                .and_then(|node| find_element(node, &[name]))
                .map(text_content)
                .ok_or_else(|| ProjectUtilError::MissingElement {
                    element: location.element_path(name),
                    path: shown.clone(),
                })
        };

        let identity = Identity::new(field(GROUP_ID)?, field(ARTIFACT_ID)?, field(VERSION)?);
        debug!("Read {:?} identity {} from {}", location, identity, shown);
        Ok(identity)
    }
}

/// Follow `path` through child elements, taking the first match at each step.
fn find_element<'a, 'input>(start: Node<'a, 'input>, path: &[&str]) -> Option<Node<'a, 'input>> {
    path.iter().try_fold(start, |node, name| {
        node.children().find(|child| child.is_element() && child.tag_name().name() == *name)
    })
}

/// Concatenated text of all descendant text nodes.
fn text_content(node: Node<'_, '_>) -> String {
    node.descendants().filter(Node::is_text).filter_map(|n| n.text()).collect()
}
