use crate::model::{PageSize, SortDirection, ThemeOverrides};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initial rows per page
    pub page_size: PageSize,
    /// Direction used the first time any column is sorted
    pub first_sort: SortDirection,
    /// Heading shown above the table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub theme: ThemeOverrides,
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".datatable-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Load the user config, `None` when there is none
    pub fn load() -> anyhow::Result<Option<Config>> {
        let Some(config_path) = Self::config_path() else {
            return Ok(None);
        };
        if !config_path.exists() {
            debug!(path = %config_path.display(), "no config file");
            return Ok(None);
        }
        Self::load_from(&config_path).map(Some)
    }

    /// Load a config file that must exist
    pub fn load_from(path: &Path) -> anyhow::Result<Config> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_json(&contents)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    pub fn from_json(contents: &str) -> anyhow::Result<Config> {
        Ok(serde_json::from_str(contents)?)
    }
}
