//! Test environment builder for isolated embed-media runs.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }
}

/// Temporary project with a `media/` input and a `build/` output path.
pub struct TestEnv {
    pub root: TempDir,
}

impl TestEnv {
    /// Empty `media/` directory, no `build/` yet
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        fs::create_dir_all(root.path().join("media")).expect("create media dir");
        Self { root }
    }

    /// `media/` populated with `files`
    pub fn with_media(files: &[(&str, &[u8])]) -> Self {
        let env = Self::new();
        for (name, bytes) in files {
            env.write_media(name, bytes);
        }
        env
    }

    pub fn media_dir(&self) -> PathBuf {
        self.root.path().join("media")
    }

    pub fn build_dir(&self) -> PathBuf {
        self.root.path().join("build")
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn write_media(&self, name: &str, bytes: &[u8]) {
        fs::write(self.media_dir().join(name), bytes).expect("write media file");
    }

    pub fn header(&self) -> String {
        read(&self.build_dir().join("media_data.h"))
    }

    pub fn source(&self) -> String {
        read(&self.build_dir().join("media_data.cpp"))
    }

    /// Run the binary with `--source media` and the given extra args
    pub fn run(&self, args: &[&str]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_embed-media"));
        cmd.current_dir(self.root.path())
            .arg("--source")
            .arg(self.media_dir())
            .args(args);
        run_command(cmd)
    }

    /// Run the binary with exactly `args`
    pub fn run_raw(&self, args: &[&str]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_embed-media"));
        cmd.current_dir(self.root.path()).args(args);
        run_command(cmd)
    }

    /// Run the binary into `build/`
    pub fn embed(&self) -> TestResult {
        let build = self.build_dir();
        self.run(&[build.to_str().expect("utf-8 temp path")])
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

pub fn run_command(mut cmd: Command) -> TestResult {
    let output = cmd.output().expect("run embed-media");
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("read {}: {}", path.display(), e))
}
