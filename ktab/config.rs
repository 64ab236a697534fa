use std::path::{Path, PathBuf};

use ktab_table::SortOrder;
use serde::{Deserialize, Serialize};

pub const APP_NAME: &str = "ktab";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Possible errors from configuration file manipulation.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// Cannot read/write configuration file.
    #[error("cannot read/write configuration file")]
    IoError(#[from] std::io::Error),

    /// Cannot serialize/deserialize configuration.
    #[error("cannot serialize/deserialize configuration")]
    SerializationError(#[from] serde_yaml::Error),
}

/// Application configuration.
#[derive(Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    #[serde(default)]
    pub hidden_columns: Vec<String>,

    #[serde(default = "default_sort_key")]
    pub sort_key: String,

    #[serde(default)]
    pub sort_order: SortOrder,
}

fn default_page_size() -> usize {
    20
}

fn default_sort_key() -> String {
    "name".to_owned()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            hidden_columns: Vec::new(),
            sort_key: default_sort_key(),
            sort_order: SortOrder::default(),
        }
    }
}

impl Config {
    /// Returns the default configuration path: `HOME/.ktab/config.yaml`.
    pub fn default_path() -> PathBuf {
        match std::env::home_dir() {
            Some(path) => path.join(format!(".{APP_NAME}")).join("config.yaml"),
            None => PathBuf::from("config.yaml"),
        }
    }

    /// Loads the configuration from a file or creates a default one if the
    /// file does not exist.
    pub fn load_or_create() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        match Self::load(&path) {
            Ok(config) => Ok(config),
            Err(ConfigError::SerializationError(error)) => {
                tracing::error!("Cannot deserialize config: {}", error);
                Ok(Config::default())
            },
            Err(error) => {
                tracing::error!("Cannot load config: {}", error);
                let config = Config::default();
                config.save(&path)?;
                Ok(config)
            },
        }
    }

    fn load(path: &Path) -> Result<Self, ConfigError> {
        let config_str = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str::<Config>(&config_str)?)
    }

    fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }

        let config_str = serde_yaml::to_string(self)?;
        std::fs::write(path, config_str)?;

        Ok(())
    }
}
