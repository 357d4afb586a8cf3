//! File integrity verification and repair.
//!
//! A local file is verified by comparing its MD5 digest with a reference
//! checksum published at a URL. When the digests differ the file can be
//! repaired from a reference copy, or a labelled copy of the reference can be
//! saved beside it for inspection.
//!
//! - [`checksum`] - Digest computation and comparison
//! - [`fetch`] - Retrieval of checksums and reference copies over `file`,
//!   `http` and `https`
//! - [`workflow`] - The verify-or-repair task
//!
//! # Examples
//!
//! ```rust,no_run
//! use project_util::integrity::{Fetcher, IntegrityOutcome, IntegrityRequest, verify_or_repair};
//! use std::time::Duration;
//!
//! # async fn example() -> project_util::core::Result<()> {
//! let fetcher = Fetcher::new(Duration::from_secs(30))?;
//! let request = IntegrityRequest {
//!     file: "target/app.jar".into(),
//!     checksum_url: "https://example.com/app.jar.md5".to_string(),
//!     reference_url: Some("https://example.com/app.jar".to_string()),
//!     replace_on_fail: true,
//! };
//!
//! match verify_or_repair(&request, &fetcher).await? {
//!     IntegrityOutcome::Verified => println!("up to date"),
//!     IntegrityOutcome::Replaced { path } => println!("replaced {}", path.display()),
//! }
//! # Ok(())
//! # }
//! ```

pub mod checksum;
pub mod fetch;
pub mod workflow;

pub use checksum::{checksums_match, compute_checksum, normalize_checksum};
pub use fetch::Fetcher;
pub use workflow::{
    IntegrityOutcome, IntegrityRequest, Verification, reference_copy_path, verify,
    verify_or_repair,
};
