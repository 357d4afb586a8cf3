use crate::common::TestProject;
use crate::fixtures::{DescriptorFixture, STACK_ARTIFACT, STACK_GROUP, STACK_REPOSITORY_PATH};
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

/// Parent and child descriptors written into the workspace.
fn descriptors(project: &TestProject, child: DescriptorFixture) -> (PathBuf, PathBuf) {
    let parent = DescriptorFixture::stack_parent().write_to(project.path()).unwrap();
    let child = child.write_to(project.path()).unwrap();
    (parent, child)
}

fn args<'a>(parent: &'a PathBuf, child: &'a PathBuf) -> Vec<&'a str> {
    vec![
        "check-parent-pom",
        "--parent-path",
        parent.to_str().unwrap(),
        "--child-path",
        child.to_str().unwrap(),
    ]
}

#[test]
fn test_parent_installed_into_default_repository() {
    let project = TestProject::new().unwrap();
    let (parent, child) = descriptors(&project, DescriptorFixture::stack_child());
    fs::create_dir_all(project.default_repository()).unwrap();

    project
        .run(&args(&parent, &child))
        .unwrap()
        .assert_success()
        .assert_stdout_contains("Installed dev.appsody:spring-boot2-stack:pom:0.3.7");

    let installed = project.default_repository().join(STACK_REPOSITORY_PATH);
    assert_eq!(fs::read(&installed).unwrap(), fs::read(&parent).unwrap());

    // Second run finds the parent already installed
    let output = project.run(&args(&parent, &child)).unwrap();
    output.assert_success();
    assert!(!output.stdout.contains("Installed"), "stdout: {}", output.stdout);
}

#[test]
fn test_repo_local_flag() {
    let project = TestProject::new().unwrap();
    let (parent, child) = descriptors(&project, DescriptorFixture::stack_child());
    let repository = project.path().join("m2");
    fs::create_dir_all(&repository).unwrap();

    let mut cmd_args = args(&parent, &child);
    cmd_args.extend(["--repo-local", repository.to_str().unwrap()]);
    project.run(&cmd_args).unwrap().assert_success();

    assert!(repository.join(STACK_REPOSITORY_PATH).is_file());
    assert!(!project.default_repository().exists());
}

#[test]
fn test_missing_repository() {
    let project = TestProject::new().unwrap();
    let (parent, child) = descriptors(&project, DescriptorFixture::stack_child());

    project
        .command()
        .args(args(&parent, &child))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Local artifact repository not found"));
}

#[test]
fn test_version_outside_declared_range() {
    let project = TestProject::new().unwrap();
    let (parent, child) = descriptors(
        &project,
        DescriptorFixture::child(STACK_GROUP, STACK_ARTIFACT, "[0.4,0.5)"),
    );
    fs::create_dir_all(project.default_repository()).unwrap();

    project
        .run(&args(&parent, &child))
        .unwrap()
        .assert_failure()
        .assert_stderr_contains(
            "Parent version '[0.4,0.5)' does not include required parent dev.appsody:spring-boot2-stack:0.3.7",
        );
}

#[test]
fn test_identity_mismatch() {
    let project = TestProject::new().unwrap();
    let (parent, child) =
        descriptors(&project, DescriptorFixture::child("dev.other", STACK_ARTIFACT, "[0.3,0.4)"));
    fs::create_dir_all(project.default_repository()).unwrap();

    project
        .run(&args(&parent, &child))
        .unwrap()
        .assert_failure()
        .assert_stderr_contains("Parent reference does not match required parent")
        .assert_stderr_contains("dev.other");
}

#[test]
fn test_missing_child_descriptor() {
    let project = TestProject::new().unwrap();
    let parent = DescriptorFixture::stack_parent().write_to(project.path()).unwrap();
    let child = project.path().join("absent/pom.xml");
    fs::create_dir_all(project.default_repository()).unwrap();

    project
        .run(&args(&parent, &child))
        .unwrap()
        .assert_failure()
        .assert_stderr_contains("File not found");
}

#[test]
fn test_child_without_parent_block() {
    let project = TestProject::new().unwrap();
    let (parent, child) = descriptors(&project, DescriptorFixture::without_parent());
    fs::create_dir_all(project.default_repository()).unwrap();

    project
        .run(&args(&parent, &child))
        .unwrap()
        .assert_failure()
        .assert_stderr_contains("Element /project/parent/groupId not found");
}
