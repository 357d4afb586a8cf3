//! Artifact fixtures for integrity tests.

#![allow(dead_code)]

pub use project_util::test_utils::fixtures::{
    DescriptorFixture, STACK_ARTIFACT, STACK_GROUP, STACK_RANGE, STACK_VERSION,
};

/// Content of the published artifact
pub const ARTIFACT: &[u8] = b"Hello, World!";
/// MD5 of [`ARTIFACT`]
pub const ARTIFACT_MD5: &str = "65A8E27D8879283831B664BD8B7F0AD4";
/// Content of a locally modified artifact
pub const TAMPERED: &[u8] = b"Hello, World?";

/// Path of the stack parent inside the local repository
pub const STACK_REPOSITORY_PATH: &str =
    "dev/appsody/spring-boot2-stack/0.3.7/spring-boot2-stack-0.3.7.pom";
