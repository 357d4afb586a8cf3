//! MD5 digests of local files.
//!
//! Digests are rendered as uppercase hex. Reference checksums may use either
//! case and may carry surrounding whitespace (a trailing newline is common);
//! both are ignored when comparing.

use crate::core::{ProjectUtilError, Result};
use md5::{Digest, Md5};
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Compute the MD5 digest of a file as uppercase hex.
///
/// # Errors
///
/// [`ProjectUtilError::MissingFile`] if the file does not exist,
/// [`ProjectUtilError::FileSystemError`] for any other read failure.
///
/// # Examples
///
/// ```rust,no_run
/// use project_util::integrity::compute_checksum;
/// use std::path::Path;
///
/// # async fn example() -> project_util::core::Result<()> {
/// let digest = compute_checksum(Path::new("target/app.jar")).await?;
/// assert_eq!(digest.len(), 32);
/// # Ok(())
/// # }
/// ```
pub async fn compute_checksum(path: &Path) -> Result<String> {
    debug!("Computing MD5 checksum for: {}", path.display());

    let contents = fs::read(path).await.map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            ProjectUtilError::MissingFile {
                path: path.display().to_string(),
            }
        } else {
            ProjectUtilError::FileSystemError {
                operation: "read".to_string(),
                path: path.display().to_string(),
                reason: e.to_string(),
            }
        }
    })?;

    let mut hasher = Md5::new();
    hasher.update(&contents);
    let digest = hex::encode_upper(hasher.finalize());

    debug!("MD5 of {}: {}", path.display(), digest);
    Ok(digest)
}

/// Trim and uppercase a checksum for comparison.
#[must_use]
pub fn normalize_checksum(checksum: &str) -> String {
    checksum.trim().to_ascii_uppercase()
}

/// Whether two checksums are equal once normalized.
#[must_use]
pub fn checksums_match(a: &str, b: &str) -> bool {
    normalize_checksum(a) == normalize_checksum(b)
}
