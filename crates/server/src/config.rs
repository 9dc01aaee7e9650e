//! Dashboard configuration.
//!
//! Example TOML:
//!
//! ```toml
//! [server]
//! listen_addr = "127.0.0.1:3030"
//!
//! [source]
//! snapshot_path = "./epoch_info.json"
//!
//! [logging]
//! level = "info"
//! log_file = "./logs/epochview.log"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Top-level dashboard configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub source: SourceSection,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
    /// Address the HTTP API listens on.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: SocketAddr,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
        }
    }
}

fn default_listen_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 3030))
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceSection {
    /// JSON file holding the node's epoch-info response. Re-read on every pass.
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: PathBuf,
}

impl Default for SourceSection {
    fn default() -> Self {
        Self {
            snapshot_path: default_snapshot_path(),
        }
    }
}

fn default_snapshot_path() -> PathBuf {
    PathBuf::from("./epoch_info.json")
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Write logs to this file instead of stdout.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            log_file: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub listen_addr: Option<SocketAddr>,
    pub snapshot_path: Option<PathBuf>,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl DashboardConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Apply CLI overrides to the configuration.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(listen_addr) = overrides.listen_addr {
            self.server.listen_addr = listen_addr;
        }

        if let Some(ref snapshot_path) = overrides.snapshot_path {
            self.source.snapshot_path = snapshot_path.clone();
        }

        if let Some(ref level) = overrides.log_level {
            self.logging.level = level.clone();
        }

        if let Some(ref log_file) = overrides.log_file {
            self.logging.log_file = Some(log_file.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_from_empty_file() {
        let config = DashboardConfig::from_toml("").unwrap();
        assert_eq!(config.server.listen_addr.port(), 3030);
        assert_eq!(
            config.source.snapshot_path,
            PathBuf::from("./epoch_info.json")
        );
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.log_file.is_none());
    }

    #[test]
    fn test_partial_sections() {
        let config = DashboardConfig::from_toml(
            r#"
            [server]
            listen_addr = "0.0.0.0:8080"

            [logging]
            log_file = "/tmp/epochview.log"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.listen_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.logging.level, "info");
        assert_eq!(
            config.logging.log_file,
            Some(PathBuf::from("/tmp/epochview.log"))
        );
    }

    #[test]
    fn test_invalid_listen_addr_rejected() {
        let result = DashboardConfig::from_toml("[server]\nlisten_addr = \"nowhere\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_overrides_win() {
        let mut config = DashboardConfig::default();
        config.apply_overrides(&ConfigOverrides {
            listen_addr: Some("127.0.0.1:9000".parse().unwrap()),
            snapshot_path: Some(PathBuf::from("/data/epoch.json")),
            log_level: Some("debug".to_string()),
            log_file: None,
        });
        assert_eq!(config.server.listen_addr.port(), 9000);
        assert_eq!(config.source.snapshot_path, PathBuf::from("/data/epoch.json"));
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.log_file.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[source]\nsnapshot_path = \"snap.json\"").unwrap();
        let config = DashboardConfig::load(file.path()).unwrap();
        assert_eq!(config.source.snapshot_path, PathBuf::from("snap.json"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = DashboardConfig::load(Path::new("/nonexistent/dashboard.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
