//! First-run installation of the Docker engine and compose tool.

use anyhow::{Context, Result};
use colored::Colorize;
use pressbox_core::{CommandRunner, Installer};

pub async fn install(runner: &dyn CommandRunner) -> Result<()> {
    println!("{} Installing Docker and Docker Compose...", "→".cyan().bold());

    Installer::new().install(runner).await.context("Failed to install Docker")?;

    println!("{} Docker and Docker Compose installed", "✓".green().bold());
    Ok(())
}
