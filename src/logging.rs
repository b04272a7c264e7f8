//! File logging
//!
//! The terminal belongs to the TUI, so log lines go to a file instead.

use crate::config::Config;
use anyhow::{Context, Result};
use std::env;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directives
pub const LOG_ENV: &str = "DATATABLE_LOG";
const DEFAULT_DIRECTIVE: &str = "info";
const LOG_FILE_NAME: &str = "datatable-tui.log";

pub fn default_log_path() -> Option<PathBuf> {
    Config::config_dir().map(|dir| dir.join(LOG_FILE_NAME))
}

/// Filter from the given directives, falling back to `info` when absent or unparsable
fn env_filter(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the global subscriber, returning the file being written
pub fn init(path: Option<&Path>) -> Result<Option<PathBuf>> {
    let Some(path) = path.map(Path::to_path_buf).or_else(default_log_path) else {
        return Ok(None);
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(env::var(LOG_ENV).ok()))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {e}"))?;

    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_default_filter() {
        assert_eq!(env_filter(None).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_filter_from_directive() {
        assert_eq!(
            env_filter(Some("debug".to_string())).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
    }

    #[test]
    fn test_bad_directive_falls_back() {
        assert_eq!(
            env_filter(Some("datatable_tui=loud".to_string())).max_level_hint(),
            Some(LevelFilter::INFO)
        );
    }

    #[test]
    fn test_default_log_path_name() {
        if let Some(path) = default_log_path() {
            assert!(path.ends_with(LOG_FILE_NAME));
        }
    }
}
