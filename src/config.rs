use crate::list::source::{DEFAULT_ACCOUNTS_FILE, Source};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const KEYS: [&str; 3] = ["source", "start_empty", "log_file"];

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub start_empty: bool,
    pub log_file: Option<PathBuf>,
    pub source: Source,
}

impl Config {
    /// Loads the user config, or the defaults if none has been written yet.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&get_config_file_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(config_path)
            .map_err(|e| ConfigError::ReadError(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&get_config_file_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError(e.to_string()))?;
        }

        let content =
            toml::to_string(self).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        fs::write(config_path, content).map_err(|e| ConfigError::WriteError(e.to_string()))
    }

    /// `source` takes `accounts`, `accounts:<path>`, `file:<path>` or `dir:<path>`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "source" => self.source = parse_source(value)?,
            "start_empty" => {
                self.start_empty = value.parse().map_err(|_| ConfigError::InvalidValue {
                    key: key.to_string(),
                    value: value.to_string(),
                })?
            }
            "log_file" => {
                self.log_file = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                }
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        match key {
            "source" => Ok(format_source(&self.source)),
            "start_empty" => Ok(self.start_empty.to_string()),
            "log_file" => Ok(self
                .log_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()),
            _ => Err(ConfigError::UnknownKey(key.to_string())),
        }
    }
}

pub fn parse_source(value: &str) -> Result<Source, ConfigError> {
    let (kind, path) = match value.split_once(':') {
        Some((kind, path)) => (kind, Some(path)),
        None => (value, None),
    };

    match (kind, path) {
        ("accounts", None) => Ok(Source::Accounts(PathBuf::from(DEFAULT_ACCOUNTS_FILE))),
        ("accounts", Some(path)) if !path.is_empty() => Ok(Source::Accounts(path.into())),
        ("file", Some(path)) if !path.is_empty() => Ok(Source::File(path.into())),
        ("dir", Some(path)) if !path.is_empty() => Ok(Source::Dir(path.into())),
        _ => Err(ConfigError::InvalidValue {
            key: "source".to_string(),
            value: value.to_string(),
        }),
    }
}

pub fn format_source(source: &Source) -> String {
    match source {
        Source::File(path) => format!("file:{}", path.display()),
        Source::Dir(path) => format!("dir:{}", path.display()),
        Source::Accounts(path) => format!("accounts:{}", path.display()),
    }
}

pub fn get_config_file_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir().ok_or(ConfigError::ConfigDirNotFound)?;

    Ok(config_dir.join("undolist").join("config.toml"))
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not find config directory")]
    ConfigDirNotFound,
    #[error("Failed to read config file: {0}")]
    ReadError(String),
    #[error("Failed to write config file: {0}")]
    WriteError(String),
    #[error("Failed to parse config file: {0}")]
    ParseError(String),
    #[error("Failed to serialize config: {0}")]
    SerializeError(String),
    #[error("Unknown configuration key '{0}'. Supported keys: source, start_empty, log_file")]
    UnknownKey(String),
    #[error("Invalid value '{value}' for '{key}'")]
    InvalidValue { key: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.source, Source::Accounts(PathBuf::from("/etc/passwd")));
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.set("source", "dir:/var/log").unwrap();
        config.set("start_empty", "true").unwrap();
        config.set("log_file", "/tmp/undolist.log").unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.get("source").unwrap(), "dir:/var/log");
        assert_eq!(loaded.get("start_empty").unwrap(), "true");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "start_empty = true\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.start_empty);
        assert_eq!(config.source, Source::default());
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn test_garbage_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "start_empty = [").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_unknown_key() {
        let mut config = Config::default();
        assert!(matches!(
            config.set("colour", "red"),
            Err(ConfigError::UnknownKey(_))
        ));
        assert!(matches!(config.get("colour"), Err(ConfigError::UnknownKey(_))));
    }

    #[test]
    fn test_parse_source_values() {
        assert_eq!(
            parse_source("file:names.txt").unwrap(),
            Source::File(PathBuf::from("names.txt"))
        );
        assert_eq!(parse_source("accounts").unwrap(), Source::default());
        assert!(parse_source("file").is_err());
        assert!(parse_source("dir:").is_err());
        assert!(parse_source("ftp:host").is_err());
    }

    #[test]
    fn test_invalid_start_empty() {
        let mut config = Config::default();
        assert!(matches!(
            config.set("start_empty", "maybe"),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
