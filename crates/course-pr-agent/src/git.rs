//! Git command execution.
//!
//! [`GitBackend`] is the seam between the change analysis and the `git`
//! binary; tests substitute a scripted backend.

use async_trait::async_trait;
use course_core::{Error, Result};
use std::path::{Path, PathBuf};

/// Captured output of one git invocation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GitOutput {
    /// Standard output, lossily decoded.
    pub stdout: String,
    /// Standard error, lossily decoded.
    pub stderr: String,
    /// Whether git exited with status 0.
    pub success: bool,
}

impl GitOutput {
    /// A successful invocation printing `stdout`.
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
            success: true,
        }
    }

    /// A failed invocation printing `stderr`.
    pub fn failed(stderr: impl Into<String>) -> Self {
        Self {
            stdout: String::new(),
            stderr: stderr.into(),
            success: false,
        }
    }
}

/// Runs git subcommands.
///
/// `run` only fails when git could not be started at all; a non-zero exit
/// status is reported through [`GitOutput::success`]. A start failure is an
/// I/O error on the working directory, since a missing binary and a missing
/// directory look the same to the OS.
#[async_trait]
pub trait GitBackend: Send + Sync {
    /// Run `git <args>`.
    async fn run(&self, args: &[&str]) -> Result<GitOutput>;
}

/// The `git` binary, run inside a working directory.
#[derive(Clone, Debug)]
pub struct GitCli {
    work_dir: PathBuf,
}

impl GitCli {
    /// Run git inside `work_dir`.
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
        }
    }

    /// Run git inside the process working directory.
    pub fn current_dir() -> Result<Self> {
        let dir = std::env::current_dir().map_err(|e| Error::io_with_path(e, "."))?;
        Ok(Self::new(dir))
    }

    /// Directory git runs in.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }
}

#[async_trait]
impl GitBackend for GitCli {
    async fn run(&self, args: &[&str]) -> Result<GitOutput> {
        tracing::debug!(?args, dir = %self.work_dir.display(), "Running git");

        let output = tokio::process::Command::new("git")
            .args(args)
            .current_dir(&self.work_dir)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| Error::io(e, &self.work_dir))?;

        Ok(GitOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            success: output.status.success(),
        })
    }
}
