//! Pressbox Core Library
//!
//! Shared types and operations for provisioning a single-site WordPress
//! development environment on top of Docker.

pub mod config;
pub mod error;
pub mod hosts;
pub mod install;
pub mod manifest;
pub mod observability;
pub mod paths;
pub mod probe;
pub mod runner;
pub mod site;

// Re-export commonly used items
pub use config::Config;
pub use error::{PressboxError, Result};
pub use hosts::HostsFile;
pub use install::Installer;
pub use probe::{EnvironmentReport, ToolStatus};
pub use runner::{CommandOutput, CommandRunner, ShellRunner};
pub use site::Site;
