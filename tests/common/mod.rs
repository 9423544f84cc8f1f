//! Shared integration-test harness: a throwaway directory plus helpers for
//! running the `env-switch` binary inside it.

#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// A temporary project directory holding `.env` files.
#[allow(clippy::missing_panics_doc)]
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    /// Creates an empty workspace.
    #[allow(clippy::missing_panics_doc)]
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    /// Root directory of the workspace.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of `name` inside the workspace.
    pub fn file(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Writes `content` to `name`.
    #[allow(clippy::missing_panics_doc)]
    pub fn write(&self, name: &str, content: &str) {
        std::fs::write(self.file(name), content).expect("failed to write fixture");
    }

    /// Reads `name`, panicking if it is missing.
    #[allow(clippy::missing_panics_doc)]
    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.file(name))
            .unwrap_or_else(|e| panic!("failed to read {name}: {e}"))
    }

    /// Whether `name` exists.
    pub fn exists(&self, name: &str) -> bool {
        self.file(name).exists()
    }

    /// Sorted file names currently in the workspace.
    #[allow(clippy::missing_panics_doc)]
    pub fn listing(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.path())
            .expect("failed to list workspace")
            .map(|e| e.expect("bad entry").file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Runs the binary with the workspace as its current directory.
    pub fn run(&self, args: &[&str]) -> Output {
        self.run_with_input(args, "")
    }

    /// Runs the binary, feeding `input` on stdin.
    #[allow(clippy::missing_panics_doc)]
    pub fn run_with_input(&self, args: &[&str], input: &str) -> Output {
        let mut child = Command::new(env!("CARGO_BIN_EXE_env-switch"))
            .args(args)
            .current_dir(self.path())
            .env_remove("ENVSWITCH_DIR")
            .env_remove("ENVSWITCH_ENVIRONMENTS")
            .env_remove("ENVSWITCH_LOG")
            .env("NO_COLOR", "1")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("failed to spawn env-switch");

        {
            let mut stdin = child.stdin.take().expect("stdin not captured");
            stdin
                .write_all(input.as_bytes())
                .expect("failed to write stdin");
        }

        child.wait_with_output().expect("failed to wait for env-switch")
    }
}

/// Stdout of `output` as a string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr of `output` as a string.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
