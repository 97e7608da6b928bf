//! Centralized path and URL configuration for Pressbox.
//!
//! All well-known locations go through this module so the CLI and tests
//! agree on where things live.

use std::path::PathBuf;

/// Get the Pressbox data directory.
///
/// Resolution order:
/// 1. `PRESSBOX_DATA_DIR` environment variable
/// 2. `~/.pressbox` for user installs
pub fn data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("PRESSBOX_DATA_DIR") {
        return PathBuf::from(dir);
    }

    dirs::home_dir().map(|h| h.join(".pressbox")).unwrap_or_else(|| PathBuf::from("/var/lib/pressbox"))
}

/// Get the configuration directory.
pub fn config_dir() -> PathBuf {
    data_dir()
}

/// Get the hosts file path.
///
/// `PRESSBOX_HOSTS_FILE` overrides the system default, which lets tests
/// point the alias writer at a scratch file.
pub fn hosts_path() -> PathBuf {
    if let Ok(path) = std::env::var("PRESSBOX_HOSTS_FILE") {
        return PathBuf::from(path);
    }

    PathBuf::from("/etc/hosts")
}

/// URL of the Docker engine convenience install script.
pub const INSTALL_SCRIPT_URL: &str = "https://get.docker.com";

/// Where the compose binary is installed on the host.
pub fn compose_install_path() -> PathBuf {
    PathBuf::from("/usr/local/bin/docker-compose")
}

/// Get the compose release download URL for the current platform.
///
/// Release assets follow the `docker-compose-$(uname -s)-$(uname -m)`
/// naming scheme, so the OS component is capitalized.
pub fn compose_url() -> Option<String> {
    let os = match std::env::consts::OS {
        "linux" => "Linux",
        "macos" => "Darwin",
        _ => return None,
    };
    let arch = match std::env::consts::ARCH {
        "x86_64" => "x86_64",
        "aarch64" => "aarch64",
        _ => return None,
    };
    Some(format!(
        "https://github.com/docker/compose/releases/latest/download/docker-compose-{}-{}",
        os, arch
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_dir_from_env() {
        std::env::set_var("PRESSBOX_DATA_DIR", "/tmp/pressbox-test");
        assert_eq!(data_dir(), PathBuf::from("/tmp/pressbox-test"));
        std::env::remove_var("PRESSBOX_DATA_DIR");
    }

    #[test]
    fn test_compose_url_platform_naming() {
        if let Some(url) = compose_url() {
            assert!(url.starts_with(
                "https://github.com/docker/compose/releases/latest/download/docker-compose-"
            ));
            assert!(url.contains(std::env::consts::ARCH));
        }
    }
}
