use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_HISTORY_LIMIT: usize = 50;
pub const DEFAULT_AUTHOR: &str = "Anônimo";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding the persisted board state.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// Maximum number of undo snapshots kept.
    #[serde(default)]
    pub history_limit: Option<usize>,
    /// Author recorded on comments when none is given.
    #[serde(default)]
    pub author: Option<String>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/fjnotes/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("fjnotes/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("fjnotes\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    pub fn load() -> Self {
        Self::config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    /// Reads a config file, falling back to defaults when it is missing or malformed.
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            if let Ok(content) = std::fs::read_to_string(path) {
                if let Ok(config) = toml::from_str(&content) {
                    return config;
                }
            }
        }
        Self::default()
    }

    pub fn effective_data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .or_else(|| dirs::data_dir().map(|data| data.join("fjnotes")))
            .unwrap_or_else(|| PathBuf::from(".fjnotes"))
    }

    pub fn effective_history_limit(&self) -> usize {
        match self.history_limit {
            Some(limit) if limit > 0 => limit,
            _ => DEFAULT_HISTORY_LIMIT,
        }
    }

    pub fn effective_author(&self) -> &str {
        self.author
            .as_deref()
            .filter(|a| !a.trim().is_empty())
            .unwrap_or(DEFAULT_AUTHOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.effective_history_limit(), DEFAULT_HISTORY_LIMIT);
        assert_eq!(config.effective_author(), DEFAULT_AUTHOR);
    }

    #[test]
    fn test_zero_history_limit_falls_back() {
        let config = AppConfig {
            history_limit: Some(0),
            ..Default::default()
        };
        assert_eq!(config.effective_history_limit(), DEFAULT_HISTORY_LIMIT);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "data_dir = \"/tmp/boards\"\nhistory_limit = 10\nauthor = \"Ana\"\n",
        )
        .unwrap();

        let config = AppConfig::load_from(&path);
        assert_eq!(config.effective_data_dir(), PathBuf::from("/tmp/boards"));
        assert_eq!(config.effective_history_limit(), 10);
        assert_eq!(config.effective_author(), "Ana");
    }

    #[test]
    fn test_malformed_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "history_limit = \"lots\"").unwrap();

        let config = AppConfig::load_from(&path);
        assert!(config.history_limit.is_none());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("absent.toml"));
        assert!(config.data_dir.is_none());
    }
}
