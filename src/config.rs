use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::assets::locator::ResourceLocator;
use crate::core::catalog::index::DuplicatePolicy;
use crate::core::catalog::loader::INDEX_PATH;
use crate::core::details::store::DETAILS_PATH;
use crate::core::search::matcher::MatchConfig;

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub data: DataConfig,
    pub matching: MatchConfig,
}

/// Data location configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Extra data root searched before the defaults.
    pub data_dir: Option<PathBuf>,
    /// Relative path of the keyword index file.
    pub index_path: PathBuf,
    /// Relative path of the detail dataset.
    pub details_path: PathBuf,
    /// How index loads treat duplicate keywords.
    pub duplicate_policy: DuplicatePolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            matching: MatchConfig::default(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            index_path: PathBuf::from(INDEX_PATH),
            details_path: PathBuf::from(DETAILS_PATH),
            duplicate_policy: DuplicatePolicy::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `~/.config/fieldguide/config.toml`.
    /// Returns `Default` if the file is missing or unparseable.
    pub fn load() -> Self {
        let config_path = Self::config_path();
        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    log::info!("Loaded config from {}", config_path.display());
                    config
                }
                Err(e) => {
                    log::warn!(
                        "Failed to parse config at {}: {e} — using defaults",
                        config_path.display()
                    );
                    Self::default()
                }
            },
            Err(_) => {
                log::debug!(
                    "No config file at {} — using defaults",
                    config_path.display()
                );
                Self::default()
            }
        }
    }

    /// Resource locator built from this config: the configured data
    /// directory (if any), then the working directory, then the user data
    /// directory.
    pub fn locator(&self) -> ResourceLocator {
        let mut locator = ResourceLocator::default();
        if let Some(dir) = &self.data.data_dir {
            locator = locator.with_root_first(dir.clone());
        }
        locator
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("fieldguide").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}
