use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::core::buddy::{BuddyOptions, DEFAULT_STATE_KEY, DEFAULT_TRANSITION};
use crate::core::BuddyError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(skip)]
    pub data_dir: PathBuf,
    #[serde(default = "default_storage_file")]
    pub storage_file: String,
    #[serde(default = "default_state_key")]
    pub state_key: String,
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,
}

fn default_storage_file() -> String {
    "storage.json".to_string()
}

fn default_state_key() -> String {
    DEFAULT_STATE_KEY.to_string()
}

fn default_transition_ms() -> u64 {
    DEFAULT_TRANSITION.as_millis() as u64
}

impl Config {
    pub fn new(data_dir: Option<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.unwrap_or_else(|| {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("bytebuddy")
        });

        // Ensure data directory exists
        std::fs::create_dir_all(&data_dir)
            .context("Failed to create data directory")?;

        let config_path = data_dir.join("config.json");

        if config_path.exists() {
            let config_str = std::fs::read_to_string(&config_path)
                .context("Failed to read config.json")?;

            if config_str.trim().is_empty() {
                tracing::warn!(
                    path = %config_path.display(),
                    "config file is empty, recreating defaults"
                );
            } else {
                match serde_json::from_str::<Config>(&config_str) {
                    Ok(mut config) => {
                        config.data_dir = data_dir;
                        tracing::debug!(path = %config_path.display(), "loaded config");
                        return Ok(config);
                    }
                    Err(e) => {
                        tracing::warn!(
                            path = %config_path.display(),
                            error = %e,
                            "failed to parse config.json, using defaults"
                        );
                        return Ok(Self::default_config(data_dir));
                    }
                }
            }
        }

        let config = Self::default_config(data_dir);
        config.save()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = self.data_dir.join("config.json");
        let json_str = serde_json::to_string_pretty(self)
            .context("Failed to serialize config")?;
        std::fs::write(&config_path, json_str)
            .context("Failed to write config.json")?;
        Ok(())
    }

    fn default_config(data_dir: PathBuf) -> Self {
        Config {
            data_dir,
            storage_file: default_storage_file(),
            state_key: default_state_key(),
            transition_ms: default_transition_ms(),
        }
    }

    pub fn storage_path(&self) -> PathBuf {
        self.data_dir.join(&self.storage_file)
    }

    pub fn buddy_options(&self) -> crate::core::Result<BuddyOptions> {
        if self.state_key.trim().is_empty() {
            return Err(BuddyError::Config("state_key must not be empty".to_string()));
        }
        if self.storage_file.trim().is_empty() {
            return Err(BuddyError::Config("storage_file must not be empty".to_string()));
        }

        Ok(BuddyOptions {
            state_key: self.state_key.clone(),
            transition: Duration::from_millis(self.transition_ms),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_run_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new(Some(dir.path().to_path_buf())).unwrap();

        assert_eq!(config.state_key, "byteBuddy");
        assert_eq!(config.transition_ms, 150);
        assert_eq!(config.storage_path(), dir.path().join("storage.json"));
        assert!(dir.path().join("config.json").exists());
    }

    #[test]
    fn test_custom_values_are_honored() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.json"),
            r#"{"state_key":"buddy","transition_ms":0}"#,
        )
        .unwrap();

        let config = Config::new(Some(dir.path().to_path_buf())).unwrap();
        assert_eq!(config.state_key, "buddy");
        assert_eq!(config.storage_file, "storage.json");

        let options = config.buddy_options().unwrap();
        assert_eq!(options.state_key, "buddy");
        assert_eq!(options.transition, Duration::from_millis(0));
    }

    #[test]
    fn test_unparsable_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.json"), "{ broken").unwrap();

        let config = Config::new(Some(dir.path().to_path_buf())).unwrap();
        assert_eq!(config.state_key, "byteBuddy");
    }

    #[test]
    fn test_empty_state_key_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::new(Some(dir.path().to_path_buf())).unwrap();
        config.state_key = "  ".to_string();
        assert!(matches!(config.buddy_options(), Err(BuddyError::Config(_))));
    }
}
