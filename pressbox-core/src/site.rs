//! Site lifecycle operations.
//!
//! A site is a directory holding a compose manifest plus the stack the
//! compose tool manages for it. Every operation passes the site directory
//! to the child process explicitly; the parent's working directory is
//! never changed, so a failure mid-operation cannot strand the process in
//! the wrong directory.

use crate::error::{PressboxError, Result};
use crate::manifest;
use crate::runner::{display_command, CommandRunner};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Default compose tool binary.
pub const DEFAULT_COMPOSE_BIN: &str = "docker-compose";

/// A single WordPress site rooted at `dir`.
#[derive(Debug, Clone)]
pub struct Site {
    name: String,
    dir: PathBuf,
    compose_bin: String,
}

impl Site {
    /// Create a handle for `name` under `root`. No filesystem side effects.
    pub fn new(root: &Path, name: impl Into<String>) -> Self {
        let name = name.into();
        Self { dir: root.join(&name), name, compose_bin: DEFAULT_COMPOSE_BIN.to_string() }
    }

    /// Override the compose binary (from configuration).
    pub fn with_compose_bin(mut self, compose_bin: impl Into<String>) -> Self {
        self.compose_bin = compose_bin.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the site directory, write the manifest, and bring the stack up.
    ///
    /// Directory creation is idempotent; an existing directory (including
    /// one left behind by an earlier site of the same name) is reused
    /// without complaint.
    #[instrument(skip(self, runner), fields(site = %self.name))]
    pub async fn create(&self, runner: &dyn CommandRunner, host_port: u16) -> Result<()> {
        info!(dir = %self.dir.display(), "creating WordPress site");

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| PressboxError::IoError { path: self.dir.clone(), source: e })?;

        let manifest_path = self.dir.join(manifest::MANIFEST_FILE_NAME);
        tokio::fs::write(&manifest_path, manifest::render(&self.name, host_port))
            .await
            .map_err(|e| PressboxError::IoError { path: manifest_path.clone(), source: e })?;

        self.compose(runner, &["up", "-d"]).await
    }

    /// Start the previously created stack.
    pub async fn start(&self, runner: &dyn CommandRunner) -> Result<()> {
        info!(site = %self.name, "starting stack");
        self.compose(runner, &["start"]).await
    }

    /// Stop the stack without removing anything.
    pub async fn stop(&self, runner: &dyn CommandRunner) -> Result<()> {
        info!(site = %self.name, "stopping stack");
        self.compose(runner, &["stop"]).await
    }

    /// Tear the stack down and remove the site directory from disk.
    #[instrument(skip(self, runner), fields(site = %self.name))]
    pub async fn delete(&self, runner: &dyn CommandRunner) -> Result<()> {
        info!(dir = %self.dir.display(), "deleting site");

        self.compose(runner, &["down"]).await?;

        tokio::fs::remove_dir_all(&self.dir)
            .await
            .map_err(|e| PressboxError::IoError { path: self.dir.clone(), source: e })?;

        Ok(())
    }

    /// Run the compose tool in the site directory and require success.
    async fn compose(&self, runner: &dyn CommandRunner, args: &[&str]) -> Result<()> {
        runner
            .run_in(Some(&self.dir), &self.compose_bin, args)
            .await?
            .expect_success(&display_command(&self.compose_bin, args))?;
        Ok(())
    }
}
