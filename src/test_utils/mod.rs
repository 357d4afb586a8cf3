//! Test utilities for project-util
//!
//! Helpers shared by unit and integration tests:
//! - Descriptor fixtures written to temporary directories
//! - An in-memory [`ArtifactCache`](crate::repository::ArtifactCache) that
//!   counts calls and can be told to fail
//! - One-time logging setup
//!
//! # Example
//!
//! ```rust,no_run
//! use project_util::test_utils::{DescriptorFixture, InMemoryCache};
//!
//! let temp = tempfile::tempdir().unwrap();
//! let parent = DescriptorFixture::stack_parent().write_to(temp.path()).unwrap();
//! let cache = InMemoryCache::new(temp.path().join("repository"));
//! ```

pub mod cache;
pub mod fixtures;

pub use cache::{FailingBuilder, InMemoryCache};
pub use fixtures::DescriptorFixture;

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has any effect. With `level` set, that level is used;
/// otherwise `RUST_LOG` is honoured if present and logging stays off if not.
///
/// ```bash
/// RUST_LOG=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}
