// File: src/config.rs
use crate::error::{Result, StatsError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const ENV_PATH: &str = "WORDSTATS_CONFIG";
const DEFAULT_PATH: &str = "wordstats.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// How many of the most common words the report lists.
    pub top_n: usize,
    /// Extra attempts the filename prompt allows after the first one.
    pub retries: usize,
    pub cloud: CloudSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CloudSettings {
    pub min_length: usize,
    pub max_words: usize,
    pub rows: usize,
    /// Font size given to the most frequent word.
    pub max_font_size: u32,
    pub title: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self { top_n: 5, retries: 3, cloud: CloudSettings::default() }
    }
}

impl Default for CloudSettings {
    fn default() -> Self {
        Self {
            min_length: 0,
            max_words: 20,
            rows: 5,
            max_font_size: 100,
            title: "Word Cloud Fun".to_string(),
        }
    }
}

impl Settings {
    pub fn from_toml(content: &str, origin: &Path) -> Result<Self> {
        let settings: Settings = toml::from_str(content).map_err(|e| StatsError::Config {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })?;
        settings.validate(origin)?;
        Ok(settings)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| StatsError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml(&content, path)
    }

    /// Explicit path, else $WORDSTATS_CONFIG, else ./wordstats.toml, else
    /// the built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let from_env = std::env::var_os(ENV_PATH).map(PathBuf::from);
        Self::resolve(explicit, from_env.as_deref(), Path::new(DEFAULT_PATH))
    }

    fn resolve(explicit: Option<&Path>, from_env: Option<&Path>, fallback: &Path) -> Result<Self> {
        if let Some(path) = explicit.or(from_env) {
            return Self::load_from(path);
        }
        if fallback.exists() {
            tracing::debug!(path = %fallback.display(), "using fallback settings file");
            return Self::load_from(fallback);
        }
        Ok(Self::default())
    }

    fn validate(&self, origin: &Path) -> Result<()> {
        let invalid = |message: &str| StatsError::Config {
            path: origin.to_path_buf(),
            message: message.to_string(),
        };
        if self.cloud.rows == 0 {
            return Err(invalid("cloud.rows must be at least 1"));
        }
        if self.cloud.max_font_size == 0 {
            return Err(invalid("cloud.max_font_size must be at least 1"));
        }
        Ok(())
    }
}
