//! User configuration
//!
//! Read from `config.yaml` in the platform config directory. A missing or
//! unreadable file falls back to defaults.

use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Store file name used when nothing else is configured
pub const DEFAULT_STORE_FILE: &str = "tickets.yaml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Path of the ticket store file
    #[serde(default)]
    pub store: Option<PathBuf>,
}

impl Config {
    /// Load the user config, or defaults if there is none
    pub fn load() -> Self {
        match project_dirs() {
            Some(dirs) => Self::load_from(&dirs.config_dir().join("config.yaml")),
            None => Self::default(),
        }
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        if content.trim().is_empty() {
            return Self::default();
        }
        match serde_yml::from_str::<Option<Config>>(&content) {
            Ok(config) => config.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring invalid config file");
                Self::default()
            }
        }
    }

    /// Resolve the store path: explicit override, then config, then the data dir
    pub fn store_path(&self, explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }
        if let Some(path) = &self.store {
            return path.clone();
        }
        data_dir()
            .map(|dir| dir.join(DEFAULT_STORE_FILE))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_FILE))
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "tix")
}

/// Per-user data directory (store file, shell history)
pub fn data_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
}
