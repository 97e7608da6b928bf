//! Interactive site lifecycle menu.

use anyhow::Result;
use colored::Colorize;
use pressbox_core::{CommandRunner, Site};
use std::io::{self, Write};

/// A parsed menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Enable,
    Delete,
    Quit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "e" => Some(Self::Enable),
            "d" => Some(Self::Delete),
            "q" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Run the menu loop until delete, quit, or stdin EOF.
///
/// The prompt mentions a disable direction, but `e` only ever starts the
/// stack; stopping without deleting is exposed through `Site::stop`, not
/// through a menu key.
pub async fn run(runner: &dyn CommandRunner, site: &Site) -> Result<()> {
    loop {
        print!("Enable/disable or delete the site? (e/d/q): ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            // stdin closed
            return Ok(());
        }

        match MenuChoice::parse(&input) {
            Some(MenuChoice::Enable) => {
                println!("Enabling the site...");
                site.start(runner).await?;
                println!("{} Site enabled", "✓".green().bold());
            }
            Some(MenuChoice::Delete) => {
                println!("Deleting the site...");
                site.delete(runner).await?;
                println!("{} Site deleted: {}", "✓".green().bold(), site.name().bold());
                return Ok(());
            }
            Some(MenuChoice::Quit) => return Ok(()),
            None => println!("Invalid choice. Please try again."),
        }
    }
}
