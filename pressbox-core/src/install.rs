//! Docker engine and compose tool installation.
//!
//! A strictly sequential, abort-on-first-failure sequence with no rollback:
//! fetch the vendor install script, run it with elevated privileges, add
//! the invoking user to the docker group, enable and start the service,
//! then install and verify the compose binary.

use crate::error::{PressboxError, Result};
use crate::paths;
use crate::runner::CommandRunner;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Installer for the Docker engine and compose tool.
///
/// URLs and destinations default to the real ones; tests point them at a
/// mock HTTP server and a scratch directory.
pub struct Installer {
    script_url: String,
    compose_url: Option<String>,
    compose_dest: PathBuf,
    work_dir: PathBuf,
}

impl Default for Installer {
    fn default() -> Self {
        Self::new()
    }
}

impl Installer {
    pub fn new() -> Self {
        Self {
            script_url: paths::INSTALL_SCRIPT_URL.to_string(),
            compose_url: paths::compose_url(),
            compose_dest: paths::compose_install_path(),
            work_dir: paths::data_dir(),
        }
    }

    pub fn with_script_url(mut self, url: impl Into<String>) -> Self {
        self.script_url = url.into();
        self
    }

    pub fn with_compose_url(mut self, url: impl Into<String>) -> Self {
        self.compose_url = Some(url.into());
        self
    }

    pub fn with_compose_dest(mut self, dest: impl Into<PathBuf>) -> Self {
        self.compose_dest = dest.into();
        self
    }

    pub fn with_work_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.work_dir = dir.into();
        self
    }

    /// Run the full install sequence.
    ///
    /// Any failing step aborts the remainder; already-completed steps are
    /// left in place.
    #[instrument(skip(self, runner))]
    pub async fn install(&self, runner: &dyn CommandRunner) -> Result<()> {
        info!("Installing Docker and Docker Compose");

        std::fs::create_dir_all(&self.work_dir)
            .map_err(|e| PressboxError::IoError { path: self.work_dir.clone(), source: e })?;

        // Engine: vendor convenience script, run as root.
        let script_path = self.work_dir.join("get-docker.sh");
        download(&self.script_url, &script_path).await?;
        let script = script_path.to_string_lossy().to_string();
        runner.run("sudo", &["sh", &script]).await?.expect_success("sudo sh get-docker.sh")?;

        // Group membership for the invoking user.
        let user = current_user();
        runner
            .run("sudo", &["usermod", "-aG", "docker", &user])
            .await?
            .expect_success("sudo usermod -aG docker")?;

        // Service management.
        runner
            .run("sudo", &["systemctl", "enable", "docker"])
            .await?
            .expect_success("sudo systemctl enable docker")?;
        runner
            .run("sudo", &["systemctl", "start", "docker"])
            .await?
            .expect_success("sudo systemctl start docker")?;

        // Compose tool: download the release binary, install it, verify it.
        let compose_url = self.compose_url.clone().ok_or_else(|| {
            PressboxError::UnsupportedPlatform {
                os: std::env::consts::OS.to_string(),
                arch: std::env::consts::ARCH.to_string(),
            }
        })?;
        let staging = self.work_dir.join("docker-compose");
        download(&compose_url, &staging).await?;

        let staging_str = staging.to_string_lossy().to_string();
        let dest_str = self.compose_dest.to_string_lossy().to_string();
        runner
            .run("sudo", &["install", "-m", "755", &staging_str, &dest_str])
            .await?
            .expect_success("sudo install docker-compose")?;

        runner
            .run(&dest_str, &["--version"])
            .await?
            .expect_success("docker-compose --version")?;

        info!("Docker and Docker Compose installed");
        Ok(())
    }
}

/// Fetch a URL to a local file.
async fn download(url: &str, dest: &Path) -> Result<()> {
    info!(url, dest = %dest.display(), "downloading");

    let response = reqwest::get(url).await.map_err(|e| PressboxError::DownloadFailed {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    if !response.status().is_success() {
        return Err(PressboxError::DownloadFailed {
            url: url.to_string(),
            reason: format!("HTTP {}", response.status()),
        });
    }

    let bytes = response.bytes().await.map_err(|e| PressboxError::DownloadFailed {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    tokio::fs::write(dest, &bytes)
        .await
        .map_err(|e| PressboxError::IoError { path: dest.to_path_buf(), source: e })?;

    Ok(())
}

/// The user to add to the docker group.
fn current_user() -> String {
    std::env::var("USER").unwrap_or_else(|_| "root".to_string())
}
