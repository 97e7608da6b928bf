use anyhow::Result;
use clap::Parser;
use pressbox_core::{observability, probe, Config, ShellRunner, Site, ToolStatus};

mod commands;
mod menu;

#[derive(Parser)]
#[command(name = "pressbox")]
#[command(about = "Local WordPress development environments on Docker", long_about = None)]
struct Cli {
    /// Site name, used for the site directory and the hosts alias
    site_name: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load()?;
    observability::init(&config.log_level)
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    let runner = ShellRunner;

    // The install check runs before argument validation, so a bare
    // `pressbox` on a fresh machine still gets the tools installed.
    let report = probe::probe_environment(&runner, &config).await?;
    if report.needs_install() {
        commands::install(&runner).await?;
        println!("Log out and back in for the docker group to apply, then re-run pressbox.");
        return Ok(());
    }
    if !report.is_ready() {
        if report.docker != ToolStatus::Ok {
            eprintln!("{} is installed but its version query failed", config.docker_bin);
        }
        if report.compose != ToolStatus::Ok {
            eprintln!("{} is installed but its version query failed", config.compose_bin);
        }
        std::process::exit(1);
    }

    let Some(site_name) = cli.site_name else {
        eprintln!("Please provide a site name as a command-line argument.");
        std::process::exit(1);
    };

    let root = std::env::current_dir()?;
    let site = Site::new(&root, site_name).with_compose_bin(&config.compose_bin);

    commands::provision(&runner, &config, &site).await?;

    menu::run(&runner, &site).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_name_is_optional_at_parse_time() {
        // The missing-name case is handled manually so it exits with
        // status 1 instead of clap's usage error.
        let cli = Cli::try_parse_from(["pressbox"]).unwrap();
        assert!(cli.site_name.is_none());

        let cli = Cli::try_parse_from(["pressbox", "demo"]).unwrap();
        assert_eq!(cli.site_name.as_deref(), Some("demo"));
    }
}
