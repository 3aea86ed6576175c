//! Host configuration loaded from a JSON file.
//!
//! Everything has a default so a missing or partial file always yields a
//! usable configuration. A malformed file logs a warning and falls back to
//! defaults rather than failing startup.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::commands::store::default_store_path;

fn default_debounce_ms() -> u64 {
    150
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Where the custom command list is persisted. Defaults to
    /// `<config dir>/omnibar/commands.json`.
    #[serde(default)]
    pub commands_path: Option<PathBuf>,

    /// Log directory override. Defaults to `<data dir>/omnibar/logs`.
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// Advisory query debounce for hosts with large collections. The engine
    /// itself is synchronous; this only tells the host how long to coalesce
    /// keystrokes before recomputing.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            commands_path: None,
            log_dir: None,
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl Config {
    /// Load configuration from `path`. Missing file yields defaults; a parse
    /// failure logs a warning and yields defaults.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "invalid config file, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                warn!(path = %path.display(), error = %e, "unreadable config file, using defaults");
                Self::default()
            }
        }
    }

    /// Default config file location: `<config dir>/omnibar/config.json`.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("omnibar")
            .join("config.json")
    }

    /// Effective custom-command storage path.
    pub fn commands_path(&self) -> PathBuf {
        self.commands_path.clone().unwrap_or_else(default_store_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let config = Config::load(Path::new("/nonexistent/omnibar/config.json"));
        assert_eq!(config.debounce_ms, 150);
        assert!(config.commands_path.is_none());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"debounce_ms": 50}"#).unwrap();

        let config = Config::load(&path);
        assert_eq!(config.debounce_ms, 50);
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn malformed_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{not json").unwrap();

        let config = Config::load(&path);
        assert_eq!(config.debounce_ms, 150);
    }
}
