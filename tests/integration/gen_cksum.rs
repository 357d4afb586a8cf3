use crate::common::TestProject;
use crate::fixtures::{ARTIFACT, ARTIFACT_MD5};
use predicates::prelude::*;

#[test]
fn test_prints_uppercase_md5() {
    let project = TestProject::new().unwrap();
    project.write("target/app.jar", ARTIFACT).unwrap();

    project
        .command()
        .args(["gen-cksum", "--file-path", "target/app.jar"])
        .assert()
        .success()
        .stdout(format!("{ARTIFACT_MD5}\n"));
}

#[test]
fn test_missing_file() {
    let project = TestProject::new().unwrap();

    project
        .command()
        .args(["gen-cksum", "--file-path", "target/absent.jar"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("File not found: target/absent.jar"));
}
