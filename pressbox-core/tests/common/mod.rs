//! Shared test support: a recording fake for the subprocess layer.

#![allow(dead_code)]

use async_trait::async_trait;
use pressbox_core::error::{PressboxError, Result};
use pressbox_core::runner::{CommandOutput, CommandRunner};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// A recorded command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub dir: Option<PathBuf>,
    pub program: String,
    pub args: Vec<String>,
}

/// Fake runner for testing (doesn't spawn real processes).
///
/// Records every invocation and lets tests script per-program behavior:
/// a program can be "missing" (spawn fails as not-found) or exit non-zero.
#[derive(Default)]
pub struct FakeRunner {
    invocations: Mutex<Vec<Invocation>>,
    missing: HashSet<String>,
    exit_codes: HashMap<String, i32>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat `program` as absent from PATH.
    pub fn missing(mut self, program: &str) -> Self {
        self.missing.insert(program.to_string());
        self
    }

    /// Make `program` exit with `code`.
    pub fn failing(mut self, program: &str, code: i32) -> Self {
        self.exit_codes.insert(program.to_string(), code);
        self
    }

    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.lock().unwrap().clone()
    }

    /// Flattened `program arg arg ...` lines, in invocation order.
    pub fn command_lines(&self) -> Vec<String> {
        self.invocations()
            .iter()
            .map(|i| {
                let mut parts = vec![i.program.clone()];
                parts.extend(i.args.iter().cloned());
                parts.join(" ")
            })
            .collect()
    }
}

#[async_trait]
impl CommandRunner for FakeRunner {
    async fn run_in(
        &self,
        dir: Option<&Path>,
        program: &str,
        args: &[&str],
    ) -> Result<CommandOutput> {
        self.invocations.lock().unwrap().push(Invocation {
            dir: dir.map(Path::to_path_buf),
            program: program.to_string(),
            args: args.iter().map(|s| s.to_string()).collect(),
        });

        if self.missing.contains(program) {
            return Err(PressboxError::ToolNotFound { program: program.to_string() });
        }

        let status = self.exit_codes.get(program).copied().unwrap_or(0);
        let stderr = if status == 0 { Vec::new() } else { b"scripted failure".to_vec() };
        Ok(CommandOutput { status: Some(status), stdout: Vec::new(), stderr })
    }
}
