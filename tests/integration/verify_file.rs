use crate::common::{TestProject, file_url, serve_once};
use crate::fixtures::{ARTIFACT, ARTIFACT_MD5, TAMPERED};
use predicates::prelude::*;
use std::fs;

/// Publish the artifact and its checksum under `remote/`; returns
/// `(checksum_url, reference_url)`.
fn publish(project: &TestProject) -> (String, String) {
    let checksum = project.write("remote/app.jar.md5", format!("{ARTIFACT_MD5}\n")).unwrap();
    let reference = project.write("remote/app.jar", ARTIFACT).unwrap();
    (file_url(&checksum), file_url(&reference))
}

#[test]
fn test_verified_file() {
    let project = TestProject::new().unwrap();
    project.write("target/app.jar", ARTIFACT).unwrap();
    let (checksum_url, _) = publish(&project);

    project
        .command()
        .args(["verify-file", "--file-path", "target/app.jar", "--cksum-url", &checksum_url])
        .assert()
        .success()
        .stdout(predicate::str::contains("matches its checksum"));
}

#[test]
fn test_checksum_from_gen_cksum_round_trips() {
    let project = TestProject::new().unwrap();
    project.write("target/app.jar", b"any build output").unwrap();

    let generated = project.run(&["gen-cksum", "--file-path", "target/app.jar"]).unwrap();
    generated.assert_success();
    let checksum = project.write("remote/app.jar.md5", &generated.stdout).unwrap();

    project
        .run(&["verify-file", "--file-path", "target/app.jar", "--cksum-url", &file_url(&checksum)])
        .unwrap()
        .assert_success();
}

#[test]
fn test_mismatch_without_reference() {
    let project = TestProject::new().unwrap();
    project.write("target/app.jar", TAMPERED).unwrap();
    let (checksum_url, _) = publish(&project);

    project
        .run(&["verify-file", "--file-path", "target/app.jar", "--cksum-url", &checksum_url])
        .unwrap()
        .assert_failure()
        .assert_stderr_contains("Checksum mismatch for file: target/app.jar")
        .assert_stderr_contains(ARTIFACT_MD5);

    assert_eq!(fs::read(project.path().join("target/app.jar")).unwrap(), TAMPERED);
}

#[test]
fn test_mismatch_saves_reference_copy() {
    let project = TestProject::new().unwrap();
    project.write("target/app.jar", TAMPERED).unwrap();
    let (checksum_url, reference_url) = publish(&project);

    project
        .run(&[
            "verify-file",
            "--file-path",
            "target/app.jar",
            "--cksum-url",
            &checksum_url,
            "--ref-url",
            &reference_url,
        ])
        .unwrap()
        .assert_failure()
        .assert_stderr_contains("target/app-reference.jar");

    assert_eq!(fs::read(project.path().join("target/app.jar")).unwrap(), TAMPERED);
    assert_eq!(fs::read(project.path().join("target/app-reference.jar")).unwrap(), ARTIFACT);
}

#[test]
fn test_mismatch_replaced_from_reference() {
    let project = TestProject::new().unwrap();
    project.write("target/app.jar", TAMPERED).unwrap();
    let (checksum_url, reference_url) = publish(&project);

    project
        .run(&[
            "verify-file",
            "--file-path",
            "target/app.jar",
            "--cksum-url",
            &checksum_url,
            "--ref-url",
            &reference_url,
            "--replace-on-fail",
        ])
        .unwrap()
        .assert_success()
        .assert_stderr_contains("warning:");

    assert_eq!(fs::read(project.path().join("target/app.jar")).unwrap(), ARTIFACT);
    assert!(!project.path().join("target/app-reference.jar").exists());
}

#[test]
fn test_replace_without_reference_url_fails() {
    let project = TestProject::new().unwrap();
    project.write("target/app.jar", TAMPERED).unwrap();
    let (checksum_url, _) = publish(&project);

    project
        .run(&[
            "verify-file",
            "--file-path",
            "target/app.jar",
            "--cksum-url",
            &checksum_url,
            "--replace-on-fail",
        ])
        .unwrap()
        .assert_failure()
        .assert_stderr_contains("Checksum mismatch");
}

#[test]
fn test_checksum_over_http() {
    let project = TestProject::new().unwrap();
    project.write("target/app.jar", ARTIFACT).unwrap();
    let base = serve_once("200 OK", ARTIFACT_MD5.to_lowercase().into_bytes()).unwrap();

    project
        .run_with_env(
            &[
                "verify-file",
                "--file-path",
                "target/app.jar",
                "--cksum-url",
                &format!("{base}/app.jar.md5"),
            ],
            &[("NO_PROXY", "*"), ("no_proxy", "*")],
        )
        .unwrap()
        .assert_success();
}

#[test]
fn test_http_error_status() {
    let project = TestProject::new().unwrap();
    project.write("target/app.jar", ARTIFACT).unwrap();
    let base = serve_once("404 Not Found", b"not here".to_vec()).unwrap();

    project
        .run_with_env(
            &[
                "verify-file",
                "--file-path",
                "target/app.jar",
                "--cksum-url",
                &format!("{base}/app.jar.md5"),
            ],
            &[("NO_PROXY", "*"), ("no_proxy", "*")],
        )
        .unwrap()
        .assert_failure()
        .assert_stderr_contains("HTTP 404");
}

#[test]
fn test_unsupported_url() {
    let project = TestProject::new().unwrap();
    project.write("target/app.jar", ARTIFACT).unwrap();

    project
        .run(&[
            "verify-file",
            "--file-path",
            "target/app.jar",
            "--cksum-url",
            "ftp://example.com/app.jar.md5",
        ])
        .unwrap()
        .assert_failure()
        .assert_stderr_contains("Unsupported URL");
}
