use crate::error::{DevkitError, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

/// Overrides the resource directory (config.json and i18n/).
pub const HOME_ENV: &str = "DEVKIT_HOME";

/// `$DEVKIT_HOME` when set and non-empty, otherwise the platform config dir.
pub fn resource_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "devkit", "devkit")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| DevkitError::Api("Could not determine config dir".to_string()))
}
