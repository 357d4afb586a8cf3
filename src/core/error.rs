//! Error handling for project-util
//!
//! This module provides the error type shared by every check and the
//! presentation layer the CLI uses to turn those errors into readable output.
//! The error system is designed around two core principles:
//! 1. **Strongly-typed errors** that classify a failure and carry its data
//!    (paths, identities, versions, URLs) without formatting prose
//! 2. **User-friendly messages** built only at the CLI boundary
//!
//! # Architecture
//!
//! - [`ProjectUtilError`] - Enumerated error kinds for all failure cases
//! - [`ErrorKind`] - Coarse classification of a [`ProjectUtilError`]
//! - [`ErrorContext`] - Wrapper that adds details and suggestions for display
//! - [`user_friendly_error`] - Maps any [`anyhow::Error`] to an [`ErrorContext`]
//!
//! # Examples
//!
//! ```rust,no_run
//! use project_util::core::{ProjectUtilError, user_friendly_error};
//!
//! let error = ProjectUtilError::MissingFile {
//!     path: "pom.xml".to_string(),
//! };
//! let ctx = user_friendly_error(anyhow::Error::from(error));
//! ctx.display(); // Shows colored error with a suggestion
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for project-util operations.
///
/// Every variant is terminal for the task that raised it; nothing is retried
/// internally. Variants carry the data a caller needs to render a precise
/// message, and [`user_friendly_error`] is the only place that renders one.
///
/// # Error Categories
///
/// ## Parsing
/// - [`VersionParse`] - Malformed version string
/// - [`RangeParse`] - Malformed or inverted version range
/// - [`DescriptorParse`] - Descriptor is not well-formed XML
///
/// ## Descriptors and local files
/// - [`MissingElement`] - Required identity element absent from a descriptor
/// - [`MissingFile`] - Required local file absent
/// - [`MissingCache`] - Local artifact repository absent
///
/// ## Artifact cache
/// - [`Resolution`] - Cache lookup failed for a reason other than "not found"
/// - [`Install`] - Building or installing the parent descriptor failed
///
/// ## Consistency
/// - [`IdentityMismatch`] - Declared parent names a different group or artifact
/// - [`VersionMismatch`] - Declared parent range excludes the required version
/// - [`VersionOutOfRange`] - A version does not satisfy a range
///
/// ## Integrity
/// - [`ChecksumMismatch`] - Local file digest differs from the reference
/// - [`NetworkError`], [`FetchTimeout`], [`UnsupportedUrl`] - Fetch failures
/// - [`ReplaceError`] - Writing a local file during repair failed
///
/// [`VersionParse`]: ProjectUtilError::VersionParse
/// [`RangeParse`]: ProjectUtilError::RangeParse
/// [`DescriptorParse`]: ProjectUtilError::DescriptorParse
/// [`MissingElement`]: ProjectUtilError::MissingElement
/// [`MissingFile`]: ProjectUtilError::MissingFile
/// [`MissingCache`]: ProjectUtilError::MissingCache
/// [`Resolution`]: ProjectUtilError::Resolution
/// [`Install`]: ProjectUtilError::Install
/// [`IdentityMismatch`]: ProjectUtilError::IdentityMismatch
/// [`VersionMismatch`]: ProjectUtilError::VersionMismatch
/// [`VersionOutOfRange`]: ProjectUtilError::VersionOutOfRange
/// [`ChecksumMismatch`]: ProjectUtilError::ChecksumMismatch
/// [`NetworkError`]: ProjectUtilError::NetworkError
/// [`FetchTimeout`]: ProjectUtilError::FetchTimeout
/// [`UnsupportedUrl`]: ProjectUtilError::UnsupportedUrl
/// [`ReplaceError`]: ProjectUtilError::ReplaceError
#[derive(Error, Debug)]
pub enum ProjectUtilError {
    /// Version string could not be parsed
    #[error("Invalid version '{version}': {reason}")]
    VersionParse {
        /// The version string as given
        version: String,
        /// Why it was rejected
        reason: String,
    },

    /// Version range expression could not be parsed or is inverted
    #[error("Invalid version range '{range}': {reason}")]
    RangeParse {
        /// The range expression as given
        range: String,
        /// Why it was rejected
        reason: String,
    },

    /// Version is well-formed but outside the requested range
    #[error("Invalid version: '{version}' for spec: '{range}'")]
    VersionOutOfRange {
        /// The version that was checked
        version: String,
        /// The range it was checked against
        range: String,
    },

    /// Descriptor file exists but is not a readable XML document
    #[error("Descriptor parsing error: {path}")]
    DescriptorParse {
        /// Path of the descriptor
        path: String,
        /// Parser diagnostic
        reason: String,
    },

    /// Required identity element is absent from a descriptor
    ///
    /// Distinct from [`MissingFile`](Self::MissingFile): the document was read,
    /// it just does not contain the element.
    #[error("Element {element} not found in descriptor {path}")]
    MissingElement {
        /// Element path that was queried, e.g. `/project/parent/version`
        element: String,
        /// Path of the descriptor
        path: String,
    },

    /// Required local file does not exist or is not a regular file
    #[error("File not found: {path}")]
    MissingFile {
        /// The missing path
        path: String,
    },

    /// Local artifact repository does not exist or is not a directory
    #[error("Local artifact repository not found: {path}")]
    MissingCache {
        /// The repository location that was checked
        path: String,
    },

    /// Cache lookup failed for a reason other than "not found"
    #[error("Failed to resolve {identity} in the local artifact repository")]
    Resolution {
        /// Identity that was being resolved
        identity: String,
        /// Underlying failure
        reason: String,
    },

    /// Building or installing the parent descriptor failed
    #[error("Failed to install {descriptor} into local artifact repository {repository}")]
    Install {
        /// Parent descriptor that was being installed
        descriptor: String,
        /// Repository location
        repository: String,
        /// Underlying failure
        reason: String,
    },

    /// Declared parent reference names a different group or artifact
    #[error(
        "Parent reference does not match required parent {expected_group}:{expected_artifact}:{expected_version}"
    )]
    IdentityMismatch {
        /// Group of the required parent
        expected_group: String,
        /// Artifact of the required parent
        expected_artifact: String,
        /// Version of the required parent
        expected_version: String,
        /// Group declared by the child
        found_group: String,
        /// Artifact declared by the child
        found_artifact: String,
    },

    /// Declared parent version range does not contain the required version
    #[error(
        "Parent version '{declared_range}' does not include required parent {group}:{artifact}:{expected_version}"
    )]
    VersionMismatch {
        /// Group of the required parent
        group: String,
        /// Artifact of the required parent
        artifact: String,
        /// Version of the required parent
        expected_version: String,
        /// Version or range declared by the child
        declared_range: String,
    },

    /// Local file digest differs from the reference digest
    #[error("Checksum mismatch for file: {path}")]
    ChecksumMismatch {
        /// File that failed verification
        path: String,
        /// Reference digest
        expected: String,
        /// Locally computed digest
        actual: String,
        /// Where a copy of the reference was saved, if one was requested
        reference_copy: Option<String>,
    },

    /// Fetching a URL failed
    #[error("Failed to fetch {url}: {reason}")]
    NetworkError {
        /// URL being fetched
        url: String,
        /// Underlying failure
        reason: String,
    },

    /// Fetching a URL did not complete within the configured timeout
    #[error("Timed out after {timeout_secs}s fetching {url}")]
    FetchTimeout {
        /// URL being fetched
        url: String,
        /// Configured timeout in seconds
        timeout_secs: u64,
    },

    /// URL is malformed or uses a scheme other than `file`, `http` or `https`
    #[error("Unsupported URL '{url}': {reason}")]
    UnsupportedUrl {
        /// The URL as given
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// Writing a local file during repair failed
    #[error("Failed to write {path}: {reason}")]
    ReplaceError {
        /// File being written
        path: String,
        /// Underlying failure
        reason: String,
    },

    /// File system operation failed
    #[error("File system error: {operation} {path}")]
    FileSystemError {
        /// Operation that failed
        operation: String,
        /// Path involved
        path: String,
        /// Underlying failure
        reason: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration error
        message: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// Other error
    #[error("{message}")]
    Other {
        /// Generic error message
        message: String,
    },
}

/// Coarse classification of a [`ProjectUtilError`].
///
/// Harnesses that only care about the category of a failure (for example to
/// pick an exit code or a log field) can match on this instead of on the
/// full variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed version, range or XML
    Parse,
    /// Required descriptor element absent
    MissingElement,
    /// Required local file or directory absent
    MissingPath,
    /// Cache lookup failed
    Resolution,
    /// Parent build or install failed
    Install,
    /// Group or artifact mismatch
    IdentityMismatch,
    /// Version outside the allowed range
    VersionMismatch,
    /// Digest mismatch
    ChecksumMismatch,
    /// Fetch failure of any kind
    Network,
    /// Local write during repair failed
    Replace,
    /// Anything else (I/O, configuration)
    Other,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Parse => "parse",
            Self::MissingElement => "missing-element",
            Self::MissingPath => "missing-path",
            Self::Resolution => "resolution",
            Self::Install => "install",
            Self::IdentityMismatch => "identity-mismatch",
            Self::VersionMismatch => "version-mismatch",
            Self::ChecksumMismatch => "checksum-mismatch",
            Self::Network => "network",
            Self::Replace => "replace",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}

impl ProjectUtilError {
    /// Classify this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::VersionParse { .. } | Self::RangeParse { .. } | Self::DescriptorParse { .. } => {
                ErrorKind::Parse
            }
            Self::MissingElement { .. } => ErrorKind::MissingElement,
            Self::MissingFile { .. } | Self::MissingCache { .. } => ErrorKind::MissingPath,
            Self::Resolution { .. } => ErrorKind::Resolution,
            Self::Install { .. } => ErrorKind::Install,
            Self::IdentityMismatch { .. } => ErrorKind::IdentityMismatch,
            Self::VersionMismatch { .. } | Self::VersionOutOfRange { .. } => {
                ErrorKind::VersionMismatch
            }
            Self::ChecksumMismatch { .. } => ErrorKind::ChecksumMismatch,
            Self::NetworkError { .. } | Self::FetchTimeout { .. } | Self::UnsupportedUrl { .. } => {
                ErrorKind::Network
            }
            Self::ReplaceError { .. } => ErrorKind::Replace,
            Self::FileSystemError { .. }
            | Self::ConfigError { .. }
            | Self::IoError(_)
            | Self::TomlError(_)
            | Self::Other { .. } => ErrorKind::Other,
        }
    }
}

/// Error context wrapper that provides user-friendly error information
///
/// `ErrorContext` wraps a [`ProjectUtilError`] and adds optional details and a
/// suggestion. This is the primary way the CLI presents errors.
///
/// # Display Format
///
/// 1. **Error**: The main error message in red
/// 2. **Details**: Additional context about the error in yellow (optional)
/// 3. **Suggestion**: Actionable steps to resolve the issue in green (optional)
///
/// # Examples
///
/// ```rust,no_run
/// use project_util::core::{ErrorContext, ProjectUtilError};
///
/// let context = ErrorContext::new(ProjectUtilError::MissingCache {
///     path: "/mvn/repository".to_string(),
/// })
/// .with_suggestion("Pass --repo-local or create the directory")
/// .with_details("The parent descriptor is installed into this repository");
///
/// context.display();
/// ```
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: ProjectUtilError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no details or suggestion.
    #[must_use]
    pub const fn new(error: ProjectUtilError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors
    ///
    /// - Error message: Red and bold
    /// - Details: Yellow
    /// - Suggestion: Green
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`]
///
/// This is the presentation boundary: the checks themselves only classify
/// failures, and this function decides what a person reads.
///
/// # Error Recognition
///
/// - [`ProjectUtilError`] variants get tailored details and suggestions
/// - [`std::io::Error`] gets filesystem-specific guidance
/// - Anything else is shown with its full cause chain
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    let error = match error.downcast::<ProjectUtilError>() {
        Ok(err) => return create_error_context(err),
        Err(other) => other,
    };

    let error = match error.downcast::<std::io::Error>() {
        Ok(io_error) => {
            let suggestion = match io_error.kind() {
                std::io::ErrorKind::PermissionDenied => {
                    "Check file ownership and permissions for the paths passed to this task"
                }
                std::io::ErrorKind::NotFound => {
                    "Check that the file or directory exists and the path is correct"
                }
                _ => "Re-run with --verbose for more information",
            };
            return ErrorContext::new(ProjectUtilError::IoError(io_error))
                .with_suggestion(suggestion);
        }
        Err(other) => other,
    };

    // Generic error - include the full error chain for better diagnostics
    let mut message = error.to_string();

    let chain: Vec<String> =
        error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(ProjectUtilError::Other {
        message,
    })
}

/// Attach details and suggestions to a specific [`ProjectUtilError`].
fn create_error_context(error: ProjectUtilError) -> ErrorContext {
    match &error {
        ProjectUtilError::VersionParse { .. } => ErrorContext::new(error)
            .with_details("Versions have the form major[.minor[.micro]][.qualifier]")
            .with_suggestion("Use numeric components separated by '.', e.g. 0.3.7"),

        ProjectUtilError::RangeParse { .. } => ErrorContext::new(error)
            .with_details(
                "Ranges are either an exact version or [low,high] with '[' / ']' inclusive and '(' / ')' exclusive bounds",
            )
            .with_suggestion("Write the range like [0.3,0.4) and make sure low <= high"),

        ProjectUtilError::VersionOutOfRange { version, range } => {
            let details = format!("'{version}' lies outside the bounds of '{range}'");
            ErrorContext::new(error).with_details(details)
        }

        ProjectUtilError::DescriptorParse { reason, .. } => {
            let details = reason.clone();
            ErrorContext::new(error)
                .with_details(details)
                .with_suggestion("Check that the descriptor is well-formed XML")
        }

        ProjectUtilError::MissingElement { element, .. } => {
            let suggestion = if element.contains("/parent/") {
                "Add a <parent> section with groupId, artifactId and version to the descriptor"
            } else {
                "Declare groupId, artifactId and version directly under <project>"
            };
            ErrorContext::new(error).with_suggestion(suggestion)
        }

        ProjectUtilError::MissingFile { .. } => ErrorContext::new(error).with_suggestion(
            "Check the path, or set APPSODY_DEV_MODE when running without materialized files",
        ),

        ProjectUtilError::MissingCache { .. } => ErrorContext::new(error)
            .with_details("The parent descriptor is resolved from and installed into this directory")
            .with_suggestion(
                "Create the directory or point --repo-local / PROJECT_UTIL_REPO_LOCAL at an existing repository",
            ),

        ProjectUtilError::Resolution { reason, .. } => {
            let details = reason.clone();
            ErrorContext::new(error).with_details(details)
        }

        ProjectUtilError::Install { reason, .. } => {
            let details = reason.clone();
            ErrorContext::new(error)
                .with_details(details)
                .with_suggestion("Check that the parent descriptor is valid and the repository is writable")
        }

        ProjectUtilError::IdentityMismatch {
            expected_group,
            expected_artifact,
            found_group,
            found_artifact,
            ..
        } => {
            let details = format!(
                "The child declares parent {found_group}:{found_artifact} but {expected_group}:{expected_artifact} is required"
            );
            ErrorContext::new(error)
                .with_details(details)
                .with_suggestion("Update groupId and artifactId in the child's <parent> section")
        }

        ProjectUtilError::VersionMismatch { expected_version, .. } => {
            let suggestion = format!(
                "Update the child's <parent><version> to a range that includes {expected_version}"
            );
            ErrorContext::new(error).with_suggestion(suggestion)
        }

        ProjectUtilError::ChecksumMismatch {
            expected,
            actual,
            reference_copy,
            ..
        } => {
            let mut details = format!("Computed {actual} but the reference is {expected}");
            if let Some(copy) = reference_copy {
                details.push_str(&format!(". Expected file content saved to {copy}"));
            }
            ErrorContext::new(error).with_details(details).with_suggestion(
                "Restore the file from the reference, or re-run with --replace-on-fail and --ref-url",
            )
        }

        ProjectUtilError::NetworkError { .. } | ProjectUtilError::UnsupportedUrl { .. } => {
            ErrorContext::new(error)
                .with_suggestion("Check the URL; file://, http:// and https:// are supported")
        }

        ProjectUtilError::FetchTimeout { .. } => {
            ErrorContext::new(error).with_suggestion("Check network connectivity or raise --timeout")
        }

        ProjectUtilError::ReplaceError { .. } => ErrorContext::new(error)
            .with_suggestion("Check that the file and its directory are writable"),

        _ => ErrorContext::new(error),
    }
}
