use crate::common::TestProject;
use predicates::prelude::*;

#[test]
fn test_version_in_range() {
    let project = TestProject::new().unwrap();

    project
        .command()
        .args(["check-version", "--range", "[0.3,0.4)", "--version", "0.3.7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.3.7 is within [0.3,0.4)"));
}

#[test]
fn test_version_out_of_range() {
    let project = TestProject::new().unwrap();

    project
        .run(&["check-version", "--range", "[0.3,0.4)", "--version", "0.4"])
        .unwrap()
        .assert_failure()
        .assert_stderr_contains("Invalid version: '0.4' for spec: '[0.3,0.4)'");

    project
        .run(&["check-version", "--range", "[0.3,0.4)", "--version", "0.2"])
        .unwrap()
        .assert_failure();
}

#[test]
fn test_exact_version_range() {
    let project = TestProject::new().unwrap();

    project
        .run(&["check-version", "--range-spec", "1.2.0", "--version", "1.2"])
        .unwrap()
        .assert_success();

    project
        .run(&["check-version", "--range-spec", "1.2.0", "--version", "1.2.1"])
        .unwrap()
        .assert_failure();
}

#[test]
fn test_malformed_range() {
    let project = TestProject::new().unwrap();

    project
        .command()
        .args(["check-version", "--range", "[0.3,0.4", "--version", "0.3.7"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid version range '[0.3,0.4'"))
        .stderr(predicate::str::contains("suggestion"));
}

#[test]
fn test_missing_arguments_is_usage_error() {
    let project = TestProject::new().unwrap();

    project
        .command()
        .args(["check-version", "--range", "[0.3,0.4)"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--version"));
}
