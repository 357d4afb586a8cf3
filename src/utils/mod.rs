//! Shared helpers
//!
//! - [`fs`] - Existence checks that honour dev mode, and atomic file writes

pub mod fs;

pub use fs::{atomic_write, ensure_dir, is_directory, is_regular_file};
