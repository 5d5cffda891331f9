use crate::commands::{CmdMessage, CmdResult};
use crate::config::{config_path, AppConfig};
use crate::error::Result;
use crate::i18n::{self, BUNDLED};
use std::fs;
use std::path::{Path, PathBuf};

/// Writes the default config and the bundled language files into `resources`.
/// Existing files are kept unless `force` is set.
pub fn run(resources: &Path, force: bool) -> Result<CmdResult> {
    fs::create_dir_all(resources)?;
    let mut result = CmdResult::default();
    let mut written: Vec<PathBuf> = Vec::new();

    let config_file = config_path(resources);
    if force || !config_file.exists() {
        let config = AppConfig {
            version: env!("CARGO_PKG_VERSION").to_string(),
            ..AppConfig::default()
        };
        config.save(resources)?;
        written.push(config_file);
    } else {
        result.add_message(CmdMessage::info(format!(
            "Kept existing {}",
            config_file.display()
        )));
    }

    for (code, source) in BUNDLED {
        let path = i18n::language_file(resources, code);
        if !force && path.exists() {
            result.add_message(CmdMessage::info(format!("Kept existing {}", path.display())));
            continue;
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, source)?;
        written.push(path);
    }

    result.add_message(CmdMessage::success(format!(
        "Initialized devkit resources at {}",
        resources.display()
    )));
    Ok(result.with_written_files(written))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Translations;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_everything() {
        let dir = TempDir::new().unwrap();
        let result = run(dir.path(), false).unwrap();
        assert_eq!(result.written_files.len(), 3);

        let config = AppConfig::load(dir.path()).unwrap();
        assert_eq!(config.language, "zh");
        assert_eq!(config.version, env!("CARGO_PKG_VERSION"));

        let zh = Translations::load(dir.path(), "zh").unwrap();
        assert_eq!(zh.get("number-converter.results"), "转换结果");
    }

    #[test]
    fn test_init_keeps_existing_files() {
        let dir = TempDir::new().unwrap();
        let custom = AppConfig {
            language: "en".to_string(),
            version: "custom".to_string(),
        };
        custom.save(dir.path()).unwrap();

        let result = run(dir.path(), false).unwrap();
        assert_eq!(result.written_files.len(), 2);
        assert_eq!(AppConfig::load(dir.path()).unwrap(), custom);
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = TempDir::new().unwrap();
        AppConfig {
            language: "en".to_string(),
            version: "custom".to_string(),
        }
        .save(dir.path())
        .unwrap();

        let result = run(dir.path(), true).unwrap();
        assert_eq!(result.written_files.len(), 3);
        assert_eq!(AppConfig::load(dir.path()).unwrap().language, "zh");
    }
}
