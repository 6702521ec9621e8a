use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_LIST_PATH: &str = "/etc/pihole/adlists.list";
pub const DEFAULT_RELOAD_PROGRAM: &str = "/usr/local/bin/pihole";

/// Command run after the list is saved (optional `[reload]` section).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReloadConfig {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl Default for ReloadConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from(DEFAULT_RELOAD_PROGRAM),
            args: vec!["-g".to_string()],
        }
    }
}

/// Configuration loaded from `~/.config/adlist/config.toml`. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdlistConfig {
    /// Blocklist source file to edit.
    pub list_path: PathBuf,
    pub reload: ReloadConfig,
}

impl Default for AdlistConfig {
    fn default() -> Self {
        Self {
            list_path: PathBuf::from(DEFAULT_LIST_PATH),
            reload: ReloadConfig::default(),
        }
    }
}

/// Location of the config file, or `None` if no XDG config dir can be determined.
pub fn config_path() -> Option<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("adlist").ok()?;
    xdg_dirs.find_config_file("config.toml")
}

/// Load the config file if there is one, else built-in defaults. The file is never created.
pub fn load_or_default() -> Result<AdlistConfig> {
    match config_path() {
        Some(path) => load_from(&path),
        None => Ok(AdlistConfig::default()),
    }
}

pub fn load_from(path: &Path) -> Result<AdlistConfig> {
    let data = fs::read_to_string(path).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let cfg: AdlistConfig = toml::from_str(&data).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(cfg)
}
