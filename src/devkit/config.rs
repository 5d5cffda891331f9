use crate::error::{ConfigLoadError, DevkitError, Result};
use crate::i18n::{self, DEFAULT_LANGUAGE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_VERSION: &str = "Unknown";

/// Startup configuration, stored in `<resources>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Translation file to load (e.g. "zh", "en")
    #[serde(default = "default_language")]
    pub language: String,

    /// Free-form version string shown in the title and package name
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_version() -> String {
    DEFAULT_VERSION.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            version: default_version(),
        }
    }
}

pub fn config_path(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_FILENAME)
}

impl AppConfig {
    pub const KEYS: [&'static str; 2] = ["language", "version"];

    /// Load config from the given directory
    pub fn load<P: AsRef<Path>>(config_dir: P) -> std::result::Result<Self, ConfigLoadError> {
        let path = config_path(config_dir.as_ref());
        if !path.exists() {
            return Err(ConfigLoadError::Missing(path));
        }

        let content = fs::read_to_string(&path).map_err(|source| ConfigLoadError::Io {
            path: path.clone(),
            source,
        })?;
        let config = serde_json::from_str(&content)
            .map_err(|source| ConfigLoadError::Malformed { path, source })?;
        Ok(config)
    }

    /// Load config, substituting defaults for a missing or malformed file
    pub fn load_or_default<P: AsRef<Path>>(config_dir: P) -> Self {
        match Self::load(config_dir) {
            Ok(config) => config,
            Err(ConfigLoadError::Missing(path)) => {
                debug!(path = %path.display(), "no config file, using defaults");
                Self::default()
            }
            Err(e) => {
                warn!(error = %e, "failed to load config, using defaults");
                Self::default()
            }
        }
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let path = config_path(config_dir);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content)?;
        debug!(path = %path.display(), language = %self.language, "saved config");
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "language" => Some(self.language.clone()),
            "version" => Some(self.version.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        if value.is_empty() {
            return Err(DevkitError::Api(format!("{} cannot be empty", key)));
        }
        match key {
            "language" => self.language = i18n::validate_code(value)?.to_string(),
            "version" => self.version = value.to_string(),
            other => return Err(DevkitError::Api(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }
}
