//! ConfigStore - Local Configuration Storage

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Serialize, de::DeserializeOwned};

use crate::error::Error;

fn project_dirs() -> Result<ProjectDirs> {
    let dirs = ProjectDirs::from("dev", "archive-gui", "archive-gui").ok_or_else(|| {
        Error::Config {
            message: "Could not determine project directories".to_string(),
        }
    })?;
    Ok(dirs)
}

/// Get or create the application's configuration directory
///
/// - **Linux**: `~/.config/archive-gui/`
/// - **macOS**: `~/Library/Application Support/dev.archive-gui.archive-gui/`
/// - **Windows**: `%APPDATA%\archive-gui\archive-gui\config\`
pub fn config_dir() -> Result<PathBuf> {
    let dir = project_dirs()?.config_dir().to_path_buf();
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    Ok(dir)
}

/// Get or create the directory holding rolling log files
pub fn log_dir() -> Result<PathBuf> {
    let dir = project_dirs()?.data_local_dir().join("logs");
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    Ok(dir)
}

/// Load a JSON config file from the config directory
pub fn load_config<T: DeserializeOwned + Default>(filename: &str) -> Result<T> {
    load_config_from(&config_dir()?.join(filename))
}

/// Save a JSON config file into the config directory
pub fn save_config<T: Serialize>(filename: &str, config: &T) -> Result<()> {
    save_config_to(&config_dir()?.join(filename), config)
}

/// Load a JSON file, returning the default when it does not exist
pub fn load_config_from<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Ok(T::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    if content.trim().is_empty() {
        return Ok(T::default());
    }
    let config: T = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(config)
}

/// Write a JSON file, replacing it atomically
pub fn save_config_to<T: Serialize>(path: &Path, config: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(config)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, content).with_context(|| format!("Failed to write {}", tmp.display()))?;
    fs::rename(&tmp, path).with_context(|| format!("Failed to replace {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::AppConfig;

    #[test]
    fn test_missing_file_yields_default() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config: AppConfig = load_config_from(&dir.path().join("config.json")).expect("load");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");

        let mut config = AppConfig::default();
        config.api.endpoint = "http://127.0.0.1:9999".to_string();
        config.ui.locale = Some("zh-CN".to_string());
        save_config_to(&path, &config).expect("save");

        let loaded: AppConfig = load_config_from(&path).expect("load");
        assert_eq!(loaded, config);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").expect("write");
        assert!(load_config_from::<AppConfig>(&path).is_err());
    }
}
