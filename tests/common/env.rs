//! Isolated environment for running the `solid` binary.

use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

/// Result of a CLI invocation
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    #[allow(dead_code)]
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Temp working directory with the binary path resolved.
pub struct TestEnv {
    pub root: TempDir,
    solid_bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("create temp dir"),
            solid_bin: PathBuf::from(env!("CARGO_BIN_EXE_solid")),
        }
    }

    /// Write a file relative to the root and return its path
    #[allow(dead_code)]
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(name);
        std::fs::write(&path, content).expect("write test file");
        path
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    #[allow(dead_code)]
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.solid_bin);
        cmd.current_dir(self.root.path())
            .args(args)
            .env_remove("SOLID_PRINCIPLES")
            .env_remove("SOLID_FORMAT")
            .env_remove("SOLID_VERBOSITY");
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("run solid binary");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
