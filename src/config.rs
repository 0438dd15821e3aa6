use serde::Deserialize;
use std::{env, path::PathBuf};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Field delimiter between a line's content and its sequence number.
    pub delimiter: char,
    /// Where summary files land; defaults to the current working directory.
    pub output_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delimiter: '|',
            output_dir: None,
        }
    }
}

impl Config {
    /// Get the default config file path (~/.bookbinder.toml)
    pub fn default_config_path() -> crate::Result<PathBuf> {
        let home_dir = env::var("HOME")
            .or_else(|_| env::var("USERPROFILE"))
            .map_err(|_| anyhow::anyhow!("Could not determine home directory"))?;
        Ok(PathBuf::from(home_dir).join(".bookbinder.toml"))
    }

    /// Load config from the default path, falling back to defaults if no file
    /// exists there.
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::default_config_path()?;

        if config_path.exists() {
            println!("📝 Loading configuration from: {}", config_path.display());
            Self::from_file(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load config from a specific file path
    pub fn from_file(path: &PathBuf) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
