//! External command execution.
//!
//! Every external tool Pressbox touches (docker, docker-compose, sudo,
//! systemctl) goes through the `CommandRunner` trait so tests can substitute
//! a recording fake for the real subprocess layer.

use crate::error::{PressboxError, Result};
use async_trait::async_trait;
use std::path::Path;
use tracing::debug;

/// Captured result of a finished command.
///
/// A non-zero exit is not an error by itself; callers that require success
/// use [`CommandOutput::expect_success`].
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Exit code, if the process exited normally.
    pub status: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl CommandOutput {
    /// Whether the command exited with status zero.
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }

    /// Stderr as a lossily-decoded string.
    pub fn stderr_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stderr).to_string()
    }

    /// Convert a non-zero exit into a `CommandFailed` error.
    pub fn expect_success(self, command: &str) -> Result<CommandOutput> {
        if self.success() {
            Ok(self)
        } else {
            Err(PressboxError::CommandFailed {
                command: command.to_string(),
                stderr: self.stderr_lossy(),
            })
        }
    }
}

/// Subprocess execution seam.
///
/// A spawn failure of kind `NotFound` maps to [`PressboxError::ToolNotFound`];
/// any other spawn failure maps to `CommandFailed`.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run a command to completion in the parent's working directory.
    async fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
        self.run_in(None, program, args).await
    }

    /// Run a command to completion, with the child's working directory set
    /// to `dir` when given. The parent's working directory is never changed.
    async fn run_in(
        &self,
        dir: Option<&Path>,
        program: &str,
        args: &[&str],
    ) -> Result<CommandOutput>;
}

/// Real runner backed by `tokio::process::Command`.
pub struct ShellRunner;

#[async_trait]
impl CommandRunner for ShellRunner {
    async fn run_in(
        &self,
        dir: Option<&Path>,
        program: &str,
        args: &[&str],
    ) -> Result<CommandOutput> {
        let mut cmd = tokio::process::Command::new(program);
        cmd.args(args);
        if let Some(dir) = dir {
            cmd.current_dir(dir);
        }

        debug!(program, ?args, ?dir, "running command");

        let output = cmd.output().await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PressboxError::ToolNotFound { program: program.to_string() }
            } else {
                PressboxError::CommandFailed {
                    command: display_command(program, args),
                    stderr: e.to_string(),
                }
            }
        })?;

        Ok(CommandOutput {
            status: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}

/// Render a command line for error messages.
pub fn display_command(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}
