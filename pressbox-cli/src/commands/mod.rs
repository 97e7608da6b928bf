//! Command implementations for the pressbox CLI.

mod install;
mod provision;

pub use install::install;
pub use provision::provision;
