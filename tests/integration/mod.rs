//! Integration test suite for project-util
//!
//! End-to-end tests that run the real binary against temporary workspaces.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **check_version**: Version range checks and error output
//! - **check_parent_pom**: Parent reference checks against a local repository
//! - **gen_cksum**: Checksum generation
//! - **verify_file**: Verification, reference copies and replacement
//! - **settings**: Dev mode, environment variables and config files

// Shared test utilities (from parent tests/ directory)
#[path = "../common/mod.rs"]
mod common;
#[path = "../fixtures/mod.rs"]
mod fixtures;

mod check_parent_pom;
mod check_version;
mod gen_cksum;
mod settings;
mod verify_file;
