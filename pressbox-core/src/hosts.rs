//! Hosts file alias registration.

use crate::error::{PressboxError, Result};
use crate::paths;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Loopback address the site alias points at.
pub const LOOPBACK: &str = "127.0.0.1";

/// Append-only writer for the hosts file.
///
/// The file is treated strictly as a write target: it is never parsed, and
/// repeated calls for the same site append the same line again. The entry
/// is written without a trailing newline, matching the original writer
/// byte for byte.
pub struct HostsFile {
    path: PathBuf,
}

impl HostsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The system hosts file (honoring the `PRESSBOX_HOSTS_FILE` override).
    pub fn system() -> Self {
        Self::new(paths::hosts_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a `127.0.0.1 <site_name>` mapping.
    pub fn add_alias(&self, site_name: &str) -> Result<()> {
        info!(site = site_name, path = %self.path.display(), "adding hosts entry");

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| PressboxError::IoError { path: self.path.clone(), source: e })?;

        write!(file, "{} {}", LOOPBACK, site_name)
            .map_err(|e| PressboxError::IoError { path: self.path.clone(), source: e })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_exact_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hosts");

        let hosts = HostsFile::new(&path);
        hosts.add_alias("demo").unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"127.0.0.1 demo");
    }

    #[test]
    fn test_repeated_calls_duplicate_the_entry() {
        // No deduplication is performed; this asserts current behavior.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hosts");

        let hosts = HostsFile::new(&path);
        hosts.add_alias("demo").unwrap();
        hosts.add_alias("demo").unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"127.0.0.1 demo127.0.0.1 demo");
    }

    #[test]
    fn test_appends_after_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hosts");
        std::fs::write(&path, "127.0.0.1 localhost\n").unwrap();

        HostsFile::new(&path).add_alias("demo").unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"127.0.0.1 localhost\n127.0.0.1 demo");
    }
}
