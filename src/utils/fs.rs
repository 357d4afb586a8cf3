//! File system helpers.
//!
//! The existence checks take a `dev_mode` flag: in dev mode the build runs
//! against descriptors and repositories that may only appear later in the
//! pipeline, so presence checks are skipped and later reads report their own
//! failures.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Whether `path` is an existing regular file, or `dev_mode` is on.
#[must_use]
pub fn is_regular_file(path: &Path, dev_mode: bool) -> bool {
    dev_mode || path.is_file()
}

/// Whether `path` is an existing directory, or `dev_mode` is on.
#[must_use]
pub fn is_directory(path: &Path, dev_mode: bool) -> bool {
    dev_mode || path.is_dir()
}

/// Ensures a directory exists, creating it and all parent directories if necessary.
///
/// # Errors
///
/// Fails if the path exists but is not a directory, or creation fails.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory: {}", path.display()))?;
    } else if !path.is_dir() {
        return Err(anyhow::anyhow!("Path exists but is not a directory: {}", path.display()));
    }
    Ok(())
}

/// Writes a file atomically.
///
/// The content goes to a temporary file in the target directory, is synced
/// to disk and then renamed over `path`, so readers see either the old file
/// or the complete new one. Parent directories are created as needed.
/// When `path` already exists its permissions carry over to the new file.
///
/// # Errors
///
/// Fails if the directory cannot be created or any step of the write fails.
///
/// # Examples
///
/// ```rust,no_run
/// use project_util::utils::fs::atomic_write;
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// atomic_write(Path::new("target/app.jar"), b"...")?;
/// # Ok(())
/// # }
/// ```
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    ensure_dir(parent)?;

    let mut temp = tempfile::NamedTempFile::new_in(parent)
        .with_context(|| format!("Failed to create temp file in: {}", parent.display()))?;
    temp.write_all(content)
        .with_context(|| format!("Failed to write to temp file: {}", temp.path().display()))?;
    temp.as_file().sync_all().with_context(|| "Failed to sync file to disk")?;

    if let Ok(existing) = fs::metadata(path) {
        temp.as_file().set_permissions(existing.permissions()).with_context(|| {
            format!("Failed to copy permissions of: {}", path.display())
        })?;
    }

    temp.persist(path)
        .with_context(|| format!("Failed to rename temp file to: {}", path.display()))?;

    Ok(())
}
