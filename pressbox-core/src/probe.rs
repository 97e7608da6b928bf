//! Environment probing for the Docker engine and compose tool.
//!
//! The probe distinguishes three outcomes per tool instead of the usual
//! binary check: a tool can be missing from PATH, present but failing its
//! version query, or present and healthy. Only "missing" means the
//! installer should run; a failing tool is surfaced to the user.

use crate::config::Config;
use crate::error::{PressboxError, Result};
use crate::runner::CommandRunner;
use tracing::debug;

/// Availability of a single external tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolStatus {
    /// The executable is not on PATH.
    NotFound,
    /// The executable ran but its version query exited non-zero.
    Failing,
    /// The version query succeeded.
    Ok,
}

/// Probe result for the container runtime and its compose tool.
#[derive(Debug, Clone, Copy)]
pub struct EnvironmentReport {
    pub docker: ToolStatus,
    pub compose: ToolStatus,
}

impl EnvironmentReport {
    /// Both tools answered their version query.
    pub fn is_ready(&self) -> bool {
        self.docker == ToolStatus::Ok && self.compose == ToolStatus::Ok
    }

    /// At least one tool is missing entirely and needs installation.
    pub fn needs_install(&self) -> bool {
        self.docker == ToolStatus::NotFound || self.compose == ToolStatus::NotFound
    }
}

/// Probe a single tool by running its version query.
pub async fn probe_tool(
    runner: &dyn CommandRunner,
    program: &str,
    args: &[&str],
) -> Result<ToolStatus> {
    match runner.run(program, args).await {
        Ok(output) if output.success() => Ok(ToolStatus::Ok),
        Ok(output) => {
            debug!(program, status = ?output.status, "version query exited non-zero");
            Ok(ToolStatus::Failing)
        }
        Err(PressboxError::ToolNotFound { .. }) => Ok(ToolStatus::NotFound),
        Err(e) => Err(e),
    }
}

/// Probe the Docker engine and the compose tool.
pub async fn probe_environment(
    runner: &dyn CommandRunner,
    config: &Config,
) -> Result<EnvironmentReport> {
    let docker = probe_tool(runner, &config.docker_bin, &["--version"]).await?;
    let compose = probe_tool(runner, &config.compose_bin, &["--version"]).await?;
    Ok(EnvironmentReport { docker, compose })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_ready() {
        let report = EnvironmentReport { docker: ToolStatus::Ok, compose: ToolStatus::Ok };
        assert!(report.is_ready());
        assert!(!report.needs_install());
    }

    #[test]
    fn test_report_needs_install_when_missing() {
        let report = EnvironmentReport { docker: ToolStatus::NotFound, compose: ToolStatus::Ok };
        assert!(!report.is_ready());
        assert!(report.needs_install());
    }

    #[test]
    fn test_failing_tool_is_not_an_install_trigger() {
        // A broken install is not a missing install; reinstalling on top of
        // it would hide the actual failure.
        let report = EnvironmentReport { docker: ToolStatus::Failing, compose: ToolStatus::Ok };
        assert!(!report.is_ready());
        assert!(!report.needs_install());
    }
}
