//! External process execution
//!
//! Collaborator tools (git, the package manager) are reached through the
//! [`ProcessRunner`] trait so the creation flow can be driven by a fake in
//! tests.

use crate::error::{Error, Result};
use async_trait::async_trait;
use camino::Utf8Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Outcome of a finished process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Whether the process exited successfully
    pub success: bool,
    /// Exit code, if the process was not killed by a signal
    pub code: Option<i32>,
    /// Captured standard error
    pub stderr: String,
}

impl CommandOutput {
    pub fn success() -> Self {
        Self {
            success: true,
            code: Some(0),
            stderr: String::new(),
        }
    }

    pub fn failure(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            code: Some(code),
            stderr: stderr.into(),
        }
    }

    /// Short human-readable reason for a failed run
    pub fn failure_reason(&self) -> String {
        let stderr = self.stderr.trim();
        if !stderr.is_empty() {
            return stderr.to_string();
        }
        match self.code {
            Some(code) => format!("exited with status {}", code),
            None => "terminated by signal".to_string(),
        }
    }
}

/// Runs external programs to completion
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Run `program` with `args`, optionally inside `cwd`, and wait for it
    async fn run(&self, program: &str, args: &[&str], cwd: Option<&Utf8Path>)
        -> Result<CommandOutput>;
}

/// [`ProcessRunner`] backed by real child processes
///
/// Output is captured rather than streamed, and the child is killed if the
/// future running it is dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

#[async_trait]
impl ProcessRunner for SystemRunner {
    async fn run(
        &self,
        program: &str,
        args: &[&str],
        cwd: Option<&Utf8Path>,
    ) -> Result<CommandOutput> {
        let resolved = which::which(program).map_err(|_| Error::missing_dependency(program))?;

        let mut cmd = Command::new(resolved);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }

        debug!("Running: {} {}", program, args.join(" "));
        let output = cmd.output().await?;

        Ok(CommandOutput {
            success: output.status.success(),
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_reason_prefers_stderr() {
        let output = CommandOutput::failure(128, "fatal: repository not found\n");
        assert_eq!(output.failure_reason(), "fatal: repository not found");
    }

    #[test]
    fn test_failure_reason_falls_back_to_status() {
        assert_eq!(
            CommandOutput::failure(1, "  ").failure_reason(),
            "exited with status 1"
        );

        let killed = CommandOutput {
            success: false,
            code: None,
            stderr: String::new(),
        };
        assert_eq!(killed.failure_reason(), "terminated by signal");
    }

    #[tokio::test]
    async fn test_missing_program_is_missing_dependency() {
        let err = SystemRunner
            .run("create-verb-no-such-tool-xyz", &["--version"], None)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::MissingDependency { ref tool } if tool == "create-verb-no-such-tool-xyz"
        ));
    }
}
