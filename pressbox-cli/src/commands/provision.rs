//! Site provisioning: stack up, hosts alias, summary output.

use anyhow::{Context, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use pressbox_core::{manifest, CommandRunner, Config, HostsFile, Site};
use std::time::Duration;
use tabled::{settings::Style, Table, Tabled};

pub async fn provision(runner: &dyn CommandRunner, config: &Config, site: &Site) -> Result<()> {
    println!("{} Creating WordPress site: {}", "→".cyan().bold(), site.name().bold());

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    spinner
        .set_message("Pulling images and starting containers (this may take a while)...".to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = site.create(runner, config.host_port).await;
    spinner.finish_and_clear();
    result.context("Failed to create site")?;

    HostsFile::new(&config.hosts_path)
        .add_alias(site.name())
        .context("Failed to add hosts entry")?;

    println!("{} Stack running: {}", "✓".green().bold(), site.name().bold());
    println!();

    #[derive(Tabled)]
    struct ServiceRow {
        #[tabled(rename = "SERVICE")]
        name: String,
        #[tabled(rename = "IMAGE")]
        image: String,
        #[tabled(rename = "PORTS")]
        ports: String,
    }

    let rows = vec![
        ServiceRow {
            name: manifest::DB_SERVICE.to_string(),
            image: "mysql:5.7".to_string(),
            ports: "-".to_string(),
        },
        ServiceRow {
            name: manifest::WORDPRESS_SERVICE.to_string(),
            image: "wordpress".to_string(),
            ports: format!("{}:80", config.host_port),
        },
    ];

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
    println!();

    println!("Open http://{} in your browser.", site.name());
    Ok(())
}
