//! The verify-or-repair task.

use super::checksum::{checksums_match, compute_checksum, normalize_checksum};
use super::fetch::Fetcher;
use crate::core::{ProjectUtilError, Result};
use crate::utils::fs::atomic_write;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Label inserted into the name of a saved reference copy.
const REFERENCE_LABEL: &str = "-reference";

/// Input to [`verify_or_repair`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrityRequest {
    /// Local file to verify
    pub file: PathBuf,
    /// URL of the reference checksum
    pub checksum_url: String,
    /// URL of the reference copy of the file
    pub reference_url: Option<String>,
    /// Replace the local file from `reference_url` when verification fails
    pub replace_on_fail: bool,
}

/// Successful result of [`verify_or_repair`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityOutcome {
    /// The file matched its reference checksum
    Verified,
    /// The file did not match and was overwritten with the reference copy
    Replaced {
        /// The file that was replaced
        path: PathBuf,
    },
}

/// Local and reference digests of one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    /// Reference checksum, normalized
    pub expected: String,
    /// Digest of the local file
    pub actual: String,
}

impl Verification {
    /// Whether the local file matches the reference.
    #[must_use]
    pub fn is_match(&self) -> bool {
        checksums_match(&self.expected, &self.actual)
    }
}

/// Compute the local digest and fetch the reference checksum.
///
/// # Errors
///
/// Local read failures from [`compute_checksum`] and fetch failures from
/// [`Fetcher::fetch_text`] propagate unchanged.
pub async fn compare(path: &Path, checksum_url: &str, fetcher: &Fetcher) -> Result<Verification> {
    let actual = compute_checksum(path).await?;
    let expected = normalize_checksum(&fetcher.fetch_text(checksum_url).await?);
    debug!("{}: local {} reference {}", path.display(), actual, expected);
    Ok(Verification {
        expected,
        actual,
    })
}

/// Whether the file at `path` matches the checksum published at `checksum_url`.
///
/// # Errors
///
/// See [`compare`]. A mismatch is `Ok(false)`; failures are never folded
/// into `false`.
pub async fn verify(path: &Path, checksum_url: &str, fetcher: &Fetcher) -> Result<bool> {
    Ok(compare(path, checksum_url, fetcher).await?.is_match())
}

/// Verify a file and, on mismatch, repair it or fail.
///
/// | Checksum | `replace_on_fail` | `reference_url` | Result |
/// |----------|-------------------|-----------------|--------|
/// | match | any | any | `Verified` |
/// | mismatch | `true` | set | file overwritten, `Replaced` |
/// | mismatch | `false` | set | reference copy saved, `ChecksumMismatch` |
/// | mismatch | any | unset | `ChecksumMismatch` |
///
/// The reference copy is saved at [`reference_copy_path`] of the file.
///
/// # Errors
///
/// [`ProjectUtilError::ChecksumMismatch`] when the file does not match and is
/// not replaced, [`ProjectUtilError::ReplaceError`] when writing the
/// replacement or the reference copy fails, plus any error from [`compare`]
/// or from fetching the reference copy.
pub async fn verify_or_repair(
    request: &IntegrityRequest,
    fetcher: &Fetcher,
) -> Result<IntegrityOutcome> {
    let file = &request.file;
    let verification = compare(file, &request.checksum_url, fetcher).await?;

    if verification.is_match() {
        info!("Checksum verified for {}", file.display());
        return Ok(IntegrityOutcome::Verified);
    }

    match (&request.reference_url, request.replace_on_fail) {
        (Some(reference_url), true) => {
            let content = fetcher.fetch_bytes(reference_url).await?;
            write_file(file, &content)?;
            warn!(
                "Checksum mismatch for {} (expected {}, found {}); replaced from {}",
                file.display(),
                verification.expected,
                verification.actual,
                reference_url
            );
            Ok(IntegrityOutcome::Replaced {
                path: file.clone(),
            })
        }
        (reference_url, _) => {
            let reference_copy = match reference_url {
                Some(url) => {
                    let content = fetcher.fetch_bytes(url).await?;
                    let copy = reference_copy_path(file);
                    write_file(&copy, &content)?;
                    info!("Saved reference copy to {}", copy.display());
                    Some(copy.display().to_string())
                }
                None => None,
            };

            Err(ProjectUtilError::ChecksumMismatch {
                path: file.display().to_string(),
                expected: verification.expected,
                actual: verification.actual,
                reference_copy,
            })
        }
    }
}

/// Sibling path used to save a reference copy of `path`.
///
/// `-reference` is inserted before the last extension of the file name:
/// `app.jar` becomes `app-reference.jar` and `a.tar.gz` becomes
/// `a.tar-reference.gz`. Names without an extension, dot files such as
/// `.env`, and names ending in a dot get the label appended instead.
#[must_use]
pub fn reference_copy_path(path: &Path) -> PathBuf {
    let Some(name) = path.file_name() else {
        let mut whole = path.as_os_str().to_owned();
        whole.push(REFERENCE_LABEL);
        return PathBuf::from(whole);
    };

    let labelled = match name.to_str() {
        Some(name) => match name.rfind('.') {
            Some(dot) if dot > 0 && dot + 1 < name.len() => {
                OsString::from(format!("{}{REFERENCE_LABEL}{}", &name[..dot], &name[dot..]))
            }
            _ => OsString::from(format!("{name}{REFERENCE_LABEL}")),
        },
        None => {
            let mut whole = name.to_owned();
            whole.push(REFERENCE_LABEL);
            whole
        }
    };
    path.with_file_name(labelled)
}

fn write_file(path: &Path, content: &[u8]) -> Result<()> {
    atomic_write(path, content).map_err(|e| ProjectUtilError::ReplaceError {
        path: path.display().to_string(),
        reason: format!("{e:#}"),
    })
}
