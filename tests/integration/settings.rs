use crate::common::TestProject;
use crate::fixtures::{DescriptorFixture, STACK_REPOSITORY_PATH};
use project_util::config::{DEV_MODE_ENV, EnvSnapshot, REPO_LOCAL_ENV};
use serial_test::serial;
use std::fs;
use std::path::PathBuf;

fn check_parent_args(project: &TestProject) -> Vec<String> {
    let parent = DescriptorFixture::stack_parent().write_to(project.path()).unwrap();
    let child = DescriptorFixture::stack_child().write_to(project.path()).unwrap();
    vec![
        "check-parent-pom".to_string(),
        "--parent-path".to_string(),
        parent.display().to_string(),
        "--child-path".to_string(),
        child.display().to_string(),
    ]
}

fn as_strs(args: &[String]) -> Vec<&str> {
    args.iter().map(String::as_str).collect()
}

#[test]
fn test_dev_mode_env_skips_repository_check() {
    let project = TestProject::new().unwrap();
    let args = check_parent_args(&project);

    project.run(&as_strs(&args)).unwrap().assert_failure();

    // Any value enables dev mode, even an empty one
    project.run_with_env(&as_strs(&args), &[("APPSODY_DEV_MODE", "")]).unwrap().assert_success();
    assert!(project.default_repository().join(STACK_REPOSITORY_PATH).is_file());
}

#[test]
fn test_dev_mode_flag() {
    let project = TestProject::new().unwrap();
    let mut args = check_parent_args(&project);
    args.push("--dev-mode".to_string());

    project.run(&as_strs(&args)).unwrap().assert_success();
}

#[test]
fn test_repository_from_environment() {
    let project = TestProject::new().unwrap();
    let args = check_parent_args(&project);
    let repository = project.path().join("env-m2");
    fs::create_dir_all(&repository).unwrap();

    project
        .run_with_env(&as_strs(&args), &[("PROJECT_UTIL_REPO_LOCAL", repository.to_str().unwrap())])
        .unwrap()
        .assert_success();
    assert!(repository.join(STACK_REPOSITORY_PATH).is_file());
}

#[test]
fn test_repository_from_config_file() {
    let project = TestProject::new().unwrap();
    let args = check_parent_args(&project);
    let repository = project.path().join("config-m2");
    fs::create_dir_all(&repository).unwrap();
    let config = format!("local_repository = {:?}\n", repository.display().to_string());
    project.write("project-util.toml", config).unwrap();

    let mut with_config = args.clone();
    with_config.extend(["--config".to_string(), "project-util.toml".to_string()]);
    project.run(&as_strs(&with_config)).unwrap().assert_success();
    assert!(repository.join(STACK_REPOSITORY_PATH).is_file());
}

#[test]
fn test_default_config_file_in_home() {
    let project = TestProject::new().unwrap();
    let args = check_parent_args(&project);
    let config_dir = project.home().join(".project-util");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "dev_mode = true\n").unwrap();

    // No repository exists, but dev mode from the config file skips the check
    project.run(&as_strs(&args)).unwrap().assert_success();
}

#[test]
fn test_invalid_config_file() {
    let project = TestProject::new().unwrap();
    project.write("bad.toml", "fetch_timeout_secs = \"later\"\n").unwrap();
    project.write("app.jar", "Hello, World!").unwrap();

    project
        .run(&[
            "--config",
            "bad.toml",
            "verify-file",
            "--file-path",
            "app.jar",
            "--cksum-url",
            "file:///absent/app.jar.md5",
        ])
        .unwrap()
        .assert_failure()
        .assert_stderr_contains("TOML");
}

#[test]
fn test_invalid_timeout_environment() {
    let project = TestProject::new().unwrap();
    project.write("app.jar", "Hello, World!").unwrap();

    project
        .run_with_env(
            &["verify-file", "--file-path", "app.jar", "--cksum-url", "file:///absent/app.jar.md5"],
            &[("PROJECT_UTIL_FETCH_TIMEOUT", "soon")],
        )
        .unwrap()
        .assert_failure()
        .assert_stderr_contains("PROJECT_UTIL_FETCH_TIMEOUT");
}

#[test]
fn test_invalid_settings_do_not_affect_settings_free_commands() {
    let project = TestProject::new().unwrap();
    project.write("bad.toml", "fetch_timeout_secs = \"later\"\n").unwrap();
    project.write("app.jar", "Hello, World!").unwrap();
    let bad_env = [("PROJECT_UTIL_FETCH_TIMEOUT", "soon")];

    project
        .run_with_env(
            &["--config", "bad.toml", "check-version", "--range", "[1,2)", "--version", "1.5"],
            &bad_env,
        )
        .unwrap()
        .assert_success();

    project
        .run_with_env(&["--config", "bad.toml", "gen-cksum", "--file-path", "app.jar"], &bad_env)
        .unwrap()
        .assert_success()
        .assert_stdout_contains("65A8E27D8879283831B664BD8B7F0AD4");
}

#[test]
#[serial]
fn test_env_snapshot_capture() {
    // SAFETY: serialized with every other test that touches the process environment
    unsafe {
        std::env::set_var(DEV_MODE_ENV, "1");
        std::env::set_var(REPO_LOCAL_ENV, "/srv/m2");
    }

    let snapshot = EnvSnapshot::capture();

    unsafe {
        std::env::remove_var(DEV_MODE_ENV);
        std::env::remove_var(REPO_LOCAL_ENV);
    }

    assert!(snapshot.dev_mode);
    assert_eq!(snapshot.local_repository, Some(PathBuf::from("/srv/m2")));
    assert!(!EnvSnapshot::capture().dev_mode);
}
