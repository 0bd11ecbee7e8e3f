use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use anyhow::Result;

use crate::engine::EngineConfig;

pub const DEFAULT_CONFIG_FILE: &str = "suffix-tally.toml";
pub const DEFAULT_HISTORY_FILE: &str = "./data/history.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub history_path: PathBuf,
    /// Zero keeps every entry.
    pub max_history_entries: usize,
    pub auto_create_directories: bool,
    pub engine: EngineConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            history_path: PathBuf::from(DEFAULT_HISTORY_FILE),
            max_history_entries: 0,
            auto_create_directories: true,
            engine: EngineConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn load_or_create(config_path: Option<&str>) -> Result<Self> {
        let config_file = config_path.unwrap_or(DEFAULT_CONFIG_FILE);

        if Path::new(config_file).exists() {
            let content = std::fs::read_to_string(config_file)?;
            let config: AppConfig = toml::from_str(&content)?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save(config_file)?;
            tracing::info!("Wrote default config to {}", config_file);
            Ok(config)
        }
    }

    pub fn save(&self, config_path: &str) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn ensure_directories(&self) -> Result<()> {
        if self.auto_create_directories {
            if let Some(parent) = self.history_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    std::fs::create_dir_all(parent)?;
                    tracing::info!("Created history directory: {:?}", parent);
                }
            }
        }
        Ok(())
    }
}
