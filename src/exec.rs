//! External process execution.
//!
//! The [`Executor`] trait is the seam between the sequence runner and the
//! operating system: production code uses [`SystemExecutor`], tests record
//! invocations with a stub. Programs are spawned directly with their
//! argument vector — never through a shell — and return a structured
//! [`ExecResult`] so callers decide explicitly what a failure means.

use std::process::{Command, Output};

use anyhow::{Context as _, Result};

/// Result of one external command execution.
#[derive(Debug, Clone)]
pub struct ExecResult {
    /// Captured standard output, lossily decoded.
    pub stdout: String,
    /// Captured standard error, lossily decoded.
    pub stderr: String,
    /// Whether the process exited with status zero.
    pub success: bool,
    /// Raw exit code, if the process exited normally.
    pub code: Option<i32>,
}

impl From<Output> for ExecResult {
    fn from(output: Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
            code: output.status.code(),
        }
    }
}

/// Abstraction over spawning external programs.
pub trait Executor {
    /// Run `program` with `args`, blocking until it terminates.
    ///
    /// A non-zero exit status is *not* an `Err` — it is reported through
    /// [`ExecResult::success`]. `Err` means the process could not be run at
    /// all (typically: executable not found).
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned.
    fn run(&self, program: &str, args: &[String]) -> Result<ExecResult>;
}

/// [`Executor`] backed by [`std::process::Command`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemExecutor;

impl Executor for SystemExecutor {
    fn run(&self, program: &str, args: &[String]) -> Result<ExecResult> {
        let output = Command::new(program)
            .args(args)
            .output()
            .with_context(|| format!("failed to execute: {program}"))?;
        Ok(ExecResult::from(output))
    }
}
