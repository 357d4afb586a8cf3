//! Version parsing and range matching.
//!
//! This module decides whether a version identifier satisfies a version-range
//! constraint, as used by the `check-version` task and by the parent-reference
//! check (a child descriptor may declare its parent version as a range).
//!
//! # Version Syntax
//!
//! | Form | Meaning |
//! |------|---------|
//! | `1` | `1.0.0` |
//! | `0.3` | `0.3.0` |
//! | `0.3.7` | `0.3.7` |
//! | `1.0.0.beta` | `1.0.0` with qualifier `beta` |
//! | `1.0-SNAPSHOT` | `1.0.0` with qualifier `SNAPSHOT` |
//!
//! Versions are ordered by major, minor and micro numerically, then by
//! qualifier lexically, where no qualifier sorts first.
//!
//! # Range Syntax
//!
//! | Syntax | Matches |
//! |--------|---------|
//! | `0.3.7` | exactly `0.3.7` |
//! | `[0.3,0.4)` | `0.3 <= v < 0.4` |
//! | `[0.3,0.4]` | `0.3 <= v <= 0.4` |
//! | `(0.3,0.4]` | `0.3 < v <= 0.4` |
//! | `(0.3,0.4)` | `0.3 < v < 0.4` |
//!
//! # Examples
//!
//! ```rust
//! use project_util::version::matches;
//!
//! assert!(matches("0.3.7", "[0.3,0.4)")?);
//! assert!(!matches("0.4", "[0.3,0.4)")?);
//! assert!(!matches("0.2", "[0.3,0.4)")?);
//! # Ok::<(), project_util::core::ProjectUtilError>(())
//! ```

mod range;


pub use range::{Bound, VersionRange};

use crate::core::{ProjectUtilError, Result};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// A parsed version: three numeric components and an optional qualifier.
///
/// Field order matters: the derived ordering compares `major`, `minor`,
/// `micro`, then `qualifier`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    major: u64,
    minor: u64,
    micro: u64,
    qualifier: String,
}

impl Version {
    /// Create a version without a qualifier.
    #[must_use]
    pub const fn new(major: u64, minor: u64, micro: u64) -> Self {
        Self {
            major,
            minor,
            micro,
            qualifier: String::new(),
        }
    }

    /// Parse a version string.
    ///
    /// Surrounding whitespace is ignored. Up to three numeric components are
    /// read; a qualifier may follow after `-` at any point, or after `.` once
    /// all three numeric components are present.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectUtilError::VersionParse`] for empty input, non-numeric
    /// components, empty or invalid qualifiers, and stray characters.
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = |reason: String| ProjectUtilError::VersionParse {
            version: input.to_string(),
            reason,
        };

        let text = input.trim();
        if text.is_empty() {
            return Err(invalid("version is empty".to_string()));
        }

        let mut numbers = [0u64; 3];
        let mut rest = text;
        let mut qualifier: Option<&str> = None;

        for (index, slot) in numbers.iter_mut().enumerate() {
            let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
            if end == 0 {
                return Err(invalid(format!("expected a number for component {}", index + 1)));
            }
            *slot = rest[..end]
                .parse()
                .map_err(|_| invalid(format!("component '{}' is too large", &rest[..end])))?;
            rest = &rest[end..];

            match rest.chars().next() {
                None => break,
                Some('-') => {
                    qualifier = Some(&rest[1..]);
                    break;
                }
                Some('.') if index < 2 => rest = &rest[1..],
                Some('.') => {
                    qualifier = Some(&rest[1..]);
                    break;
                }
                Some(c) => return Err(invalid(format!("unexpected character '{c}'"))),
            }
        }

        let qualifier = match qualifier {
            None => String::new(),
            Some("") => return Err(invalid("qualifier is empty".to_string())),
            Some(q) => {
                if let Some(c) =
                    q.chars().find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-'))
                {
                    return Err(invalid(format!("invalid character '{c}' in qualifier")));
                }
                q.to_string()
            }
        };

        let [major, minor, micro] = numbers;
        Ok(Self {
            major,
            minor,
            micro,
            qualifier,
        })
    }

    /// Major component.
    #[must_use]
    pub const fn major(&self) -> u64 {
        self.major
    }

    /// Minor component (0 when omitted).
    #[must_use]
    pub const fn minor(&self) -> u64 {
        self.minor
    }

    /// Micro component (0 when omitted).
    #[must_use]
    pub const fn micro(&self) -> u64 {
        self.micro
    }

    /// Qualifier, empty when absent.
    #[must_use]
    pub fn qualifier(&self) -> &str {
        &self.qualifier
    }
}

impl FromStr for Version {
    type Err = ProjectUtilError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)?;
        if !self.qualifier.is_empty() {
            write!(f, ".{}", self.qualifier)?;
        }
        Ok(())
    }
}

/// Check whether `version` lies within `range`.
///
/// # Errors
///
/// Returns a parse error when either string is malformed. A well-formed
/// version outside the range is `Ok(false)`, never an error.
pub fn matches(version: &str, range: &str) -> Result<bool> {
    let range = VersionRange::parse(range)?;
    let version = Version::parse(version)?;
    let included = range.includes(&version);
    debug!("Version {} in {}: {}", version, range, included);
    Ok(included)
}

/// Require `version` to lie within `range`.
///
/// This is the `check-version` task: the same test as [`matches`], with an
/// out-of-range version reported as [`ProjectUtilError::VersionOutOfRange`].
///
/// # Errors
///
/// Parse errors from [`matches`], or `VersionOutOfRange` when the version is
/// not included.
pub fn require_in_range(version: &str, range: &str) -> Result<()> {
    if matches(version, range)? {
        Ok(())
    } else {
        Err(ProjectUtilError::VersionOutOfRange {
            version: version.to_string(),
            range: range.to_string(),
        })
    }
}
