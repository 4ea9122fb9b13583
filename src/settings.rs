//! Static host settings
//!
//! Only the listening port comes from the environment. The site files are
//! located next to the executable when shipped that way, otherwise in the
//! crate root, never relative to the working directory.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::DEFAULT_PORT;

/// Environment variable holding the listening port
pub const PORT_VAR: &str = "PORTFOLIO_PORT";

/// Static asset tree, relative to the site root
pub const PUBLIC_DIR: &str = "public";
/// Portfolio document, relative to the site root
pub const INDEX_FILE: &str = "views/index.html";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid {name} value {value:?}: {source}")]
    InvalidPort {
        name: &'static str,
        value: String,
        source: std::num::ParseIntError,
    },
}

/// Where to listen and what to serve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    pub bind: IpAddr,
    pub port: u16,
    /// Root of the static asset tree
    pub public_dir: PathBuf,
    /// Document served for `GET /`
    pub index_file: PathBuf,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self::for_site_root(Path::new(env!("CARGO_MANIFEST_DIR")), DEFAULT_PORT)
    }
}

impl ServerSettings {
    /// Settings serving `root/public` and `root/views/index.html`
    pub fn for_site_root(root: &Path, port: u16) -> Self {
        Self {
            bind: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port,
            public_dir: root.join(PUBLIC_DIR),
            index_file: root.join(INDEX_FILE),
        }
    }

    /// Load settings from the process environment
    pub fn from_env() -> Result<Self, SettingsError> {
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));
        let root = site_root(exe_dir.as_deref(), Path::new(env!("CARGO_MANIFEST_DIR")));
        let port = parse_port(std::env::var(PORT_VAR).ok())?;
        Ok(Self::for_site_root(&root, port))
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}

/// Pick the site root: the executable's directory if it carries the
/// portfolio document, otherwise `fallback`
pub fn site_root(exe_dir: Option<&Path>, fallback: &Path) -> PathBuf {
    match exe_dir {
        Some(dir) if dir.join(INDEX_FILE).is_file() => dir.to_path_buf(),
        _ => fallback.to_path_buf(),
    }
}

/// Parse the port variable, defaulting when unset
pub fn parse_port(value: Option<String>) -> Result<u16, SettingsError> {
    match value {
        None => Ok(DEFAULT_PORT),
        Some(value) => value.trim().parse().map_err(|source| SettingsError::InvalidPort {
            name: PORT_VAR,
            value: value.clone(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_port_defaults_when_unset() {
        assert_eq!(parse_port(None).unwrap(), 3000);
    }

    #[test]
    fn test_port_override() {
        assert_eq!(parse_port(Some(" 8080 ".to_string())).unwrap(), 8080);
    }

    #[test]
    fn test_bad_port_is_an_error() {
        let err = parse_port(Some("http".to_string())).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidPort { .. }));
        assert!(err.to_string().contains("PORTFOLIO_PORT"));
    }

    #[test]
    fn test_default_paths_are_anchored() {
        let settings = ServerSettings::default();
        assert!(settings.public_dir.is_absolute());
        assert!(settings.index_file.is_absolute());
        assert!(settings.index_file.ends_with("views/index.html"));
        assert_eq!(settings.socket_addr().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_default_paths_point_at_shipped_site() {
        let settings = ServerSettings::default();
        assert!(settings.index_file.is_file());
        assert!(settings.public_dir.join("styles.css").is_file());
    }

    #[test]
    fn test_site_root_prefers_executable_dir_with_site() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("views")).unwrap();
        fs::write(dir.path().join(INDEX_FILE), "<html></html>").unwrap();

        let root = site_root(Some(dir.path()), Path::new("/fallback"));
        assert_eq!(root, dir.path());
    }

    #[test]
    fn test_site_root_falls_back_without_site() {
        let dir = TempDir::new().unwrap();
        assert_eq!(site_root(Some(dir.path()), Path::new("/fallback")), Path::new("/fallback"));
        assert_eq!(site_root(None, Path::new("/fallback")), Path::new("/fallback"));
    }
}
