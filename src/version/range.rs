//! Version range expressions.

use super::Version;
use crate::core::{ProjectUtilError, Result};
use std::fmt;
use std::str::FromStr;

/// One end of an interval range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bound {
    /// Boundary version
    pub version: Version,
    /// Whether the boundary version itself is part of the range
    pub inclusive: bool,
}

/// A parsed version range.
///
/// Either a single exact version or an interval with independently
/// inclusive or exclusive ends. An interval always satisfies
/// `low.version <= high.version`; [`VersionRange::parse`] rejects inverted
/// input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionRange {
    /// Matches exactly one version
    Exact(Version),
    /// Matches versions between two bounds
    Interval {
        /// Lower bound
        low: Bound,
        /// Upper bound
        high: Bound,
    },
}

impl VersionRange {
    /// Parse a range expression.
    ///
    /// Text without brackets is an exact version. Bracketed text must have the
    /// form `{[|(}low,high{]|)}`; whitespace around the expression and around
    /// each bound is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectUtilError::RangeParse`] for missing or unbalanced
    /// brackets, a missing or repeated comma, unparsable bounds, or a lower
    /// bound greater than the upper bound.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use project_util::version::{Version, VersionRange};
    ///
    /// let range = VersionRange::parse("[0.3, 0.4)")?;
    /// assert!(range.includes(&Version::parse("0.3.7")?));
    /// assert!(!range.includes(&Version::parse("0.4")?));
    /// # Ok::<(), project_util::core::ProjectUtilError>(())
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = |reason: String| ProjectUtilError::RangeParse {
            range: input.to_string(),
            reason,
        };

        let text = input.trim();
        if text.is_empty() {
            return Err(invalid("range is empty".to_string()));
        }

        let low_inclusive = match text.chars().next() {
            Some('[') => true,
            Some('(') => false,
            _ => {
                if text.contains(['[', ']', '(', ')', ',']) {
                    return Err(invalid("unbalanced brackets".to_string()));
                }
                let version = Version::parse(text).map_err(|e| invalid(reason_of(e)))?;
                return Ok(Self::Exact(version));
            }
        };

        let high_inclusive = match text.chars().last() {
            Some(']') if text.len() > 1 => true,
            Some(')') if text.len() > 1 => false,
            _ => return Err(invalid("missing closing ']' or ')'".to_string())),
        };

        let inner = &text[1..text.len() - 1];
        if inner.contains(['[', ']', '(', ')']) {
            return Err(invalid("unbalanced brackets".to_string()));
        }

        let (low, high) =
            inner.split_once(',').ok_or_else(|| invalid("missing ',' between bounds".to_string()))?;
        if high.contains(',') {
            return Err(invalid("expected exactly one ',' between bounds".to_string()));
        }

        let low = Version::parse(low)
            .map_err(|e| invalid(format!("invalid lower bound: {}", reason_of(e))))?;
        let high = Version::parse(high)
            .map_err(|e| invalid(format!("invalid upper bound: {}", reason_of(e))))?;

        if low > high {
            return Err(invalid(format!("lower bound {low} is greater than upper bound {high}")));
        }

        Ok(Self::Interval {
            low: Bound {
                version: low,
                inclusive: low_inclusive,
            },
            high: Bound {
                version: high,
                inclusive: high_inclusive,
            },
        })
    }

    /// Whether `version` lies within this range.
    #[must_use]
    pub fn includes(&self, version: &Version) -> bool {
        match self {
            Self::Exact(exact) => exact == version,
            Self::Interval { low, high } => {
                let above_low = if low.inclusive {
                    version >= &low.version
                } else {
                    version > &low.version
                };
                let below_high = if high.inclusive {
                    version <= &high.version
                } else {
                    version < &high.version
                };
                above_low && below_high
            }
        }
    }
}

fn reason_of(error: ProjectUtilError) -> String {
    match error {
        ProjectUtilError::VersionParse { version, reason } => format!("'{version}': {reason}"),
        other => other.to_string(),
    }
}

impl FromStr for VersionRange {
    type Err = ProjectUtilError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(version) => write!(f, "{version}"),
            Self::Interval { low, high } => write!(
                f,
                "{}{},{}{}",
                if low.inclusive { '[' } else { '(' },
                low.version,
                high.version,
                if high.inclusive { ']' } else { ')' }
            ),
        }
    }
}
