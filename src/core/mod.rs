//! Core types for project-util
//!
//! This module holds the error model every check reports through:
//!
//! - [`ProjectUtilError`] - Enumerated error kinds with structured data
//! - [`ErrorKind`] - Coarse classification used by harnesses and logs
//! - [`ErrorContext`] - User-friendly wrapper with details and suggestions
//! - [`user_friendly_error`] - Convert any error to a displayable context
//!
//! Library code returns [`Result`]; the CLI works in [`anyhow::Result`] and
//! converts at the very end, in `main`.
//!
//! # Examples
//!
//! ```rust
//! use project_util::core::{ErrorKind, ProjectUtilError, Result};
//!
//! fn check() -> Result<()> {
//!     Err(ProjectUtilError::MissingFile {
//!         path: "pom.xml".to_string(),
//!     })
//! }
//!
//! let err = check().unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::MissingPath);
//! ```

pub mod error;

pub use error::{ErrorContext, ErrorKind, ProjectUtilError, user_friendly_error};

/// Result alias used by every library-level operation.
pub type Result<T, E = ProjectUtilError> = std::result::Result<T, E>;
