//! Shared helpers for integration tests.

#![allow(dead_code)]

use anyhow::{Context, Result};
use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Environment variables the binary reads; cleared for every run.
const PROJECT_UTIL_ENV: &[&str] = &[
    "APPSODY_DEV_MODE",
    "PROJECT_UTIL_REPO_LOCAL",
    "PROJECT_UTIL_FETCH_TIMEOUT",
    "PROJECT_UTIL_CONFIG",
    "RUST_LOG",
];

/// An isolated workspace with its own home directory.
pub struct TestProject {
    _temp_dir: TempDir, // Keep alive for RAII cleanup
    root: PathBuf,
    home: PathBuf,
}

impl TestProject {
    /// Create a workspace with an empty home directory
    pub fn new() -> Result<Self> {
        project_util::test_utils::init_test_logging(None);
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path().join("workspace");
        let home = temp_dir.path().join("home");

        fs::create_dir_all(&root)?;
        fs::create_dir_all(&home)?;

        Ok(Self {
            _temp_dir: temp_dir,
            root,
            home,
        })
    }

    /// Workspace directory; commands run here
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Home directory seen by the binary
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// The default local repository under the test home
    pub fn default_repository(&self) -> PathBuf {
        self.home.join(".m2").join("repository")
    }

    /// Write a file relative to the workspace
    pub fn write(&self, path: &str, content: impl AsRef<[u8]>) -> Result<PathBuf> {
        let file_path = self.root.join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write {}", file_path.display()))?;
        Ok(file_path)
    }

    /// A command for the binary with a clean environment
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::new(env!("CARGO_BIN_EXE_project-util"));
        cmd.current_dir(&self.root).env("HOME", &self.home).env("NO_COLOR", "1");
        for name in PROJECT_UTIL_ENV {
            cmd.env_remove(name);
        }
        cmd
    }

    /// Run the binary and capture its output
    pub fn run(&self, args: &[&str]) -> Result<CommandOutput> {
        self.run_with_env(args, &[])
    }

    /// Run the binary with extra environment variables
    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> Result<CommandOutput> {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_project-util"));
        cmd.args(args).current_dir(&self.root).env("HOME", &self.home).env("NO_COLOR", "1");
        for name in PROJECT_UTIL_ENV {
            cmd.env_remove(name);
        }
        for (name, value) in env {
            cmd.env(name, value);
        }
        let output = cmd.output().context("Failed to run project-util")?;

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
            code: output.status.code(),
        })
    }
}

/// `file://` URL for a local path
pub fn file_url(path: &Path) -> String {
    reqwest::Url::from_file_path(path).map(|url| url.to_string()).unwrap_or_default()
}

/// Serve one HTTP response on a background thread and return the base URL.
pub fn serve_once(status_line: &'static str, body: Vec<u8>) -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    std::thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 2048];
            let _ = stream.read(&mut buf);
            let header = format!(
                "HTTP/1.1 {status_line}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            let _ = stream.write_all(header.as_bytes());
            let _ = stream.write_all(&body);
        }
    });
    Ok(format!("http://{addr}"))
}

/// Command output helper
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
    pub code: Option<i32>,
}

impl CommandOutput {
    /// Assert the command succeeded
    pub fn assert_success(&self) -> &Self {
        assert!(
            self.success,
            "Command failed with code {:?}\nStderr: {}",
            self.code, self.stderr
        );
        self
    }

    /// Assert the command exited with status 1
    pub fn assert_failure(&self) -> &Self {
        assert_eq!(self.code, Some(1), "Expected exit code 1\nStderr: {}", self.stderr);
        self
    }

    /// Assert stdout contains the given text
    pub fn assert_stdout_contains(&self, text: &str) -> &Self {
        assert!(
            self.stdout.contains(text),
            "Expected stdout to contain '{}'\nActual stdout: {}",
            text,
            self.stdout
        );
        self
    }

    /// Assert stderr contains the given text
    pub fn assert_stderr_contains(&self, text: &str) -> &Self {
        assert!(
            self.stderr.contains(text),
            "Expected stderr to contain '{}'\nActual stderr: {}",
            text,
            self.stderr
        );
        self
    }
}
