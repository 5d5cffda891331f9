//! # API Facade
//!
//! [`DevkitApi`] is the application context every UI client talks to. It owns
//! the resource directory, the startup [`AppConfig`] and the active
//! [`Translations`], and dispatches to the command layer.
//!
//! There is no process-wide language singleton: the active language lives
//! here and is handed to the commands that need it. Conversion and reference
//! lookups stay pure functions of their arguments.

use crate::commands;
use crate::config::AppConfig;
use crate::error::Result;
use crate::i18n::{self, Translations};
use crate::radix::Radix;
use crate::reference::Locale;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub struct DevkitApi {
    resources: PathBuf,
    config: AppConfig,
    translations: Translations,
}

impl DevkitApi {
    /// Loads config (defaults on failure) and the translation table for
    /// `language_override` or the configured language (empty on failure).
    pub fn open(resources: impl Into<PathBuf>, language_override: Option<&str>) -> Result<Self> {
        let resources = resources.into();
        let mut config = AppConfig::load_or_default(&resources);
        config.language = match i18n::validate_code(&config.language) {
            Ok(code) => code.to_string(),
            Err(_) => {
                warn!(language = %config.language, "invalid language in config, using default");
                i18n::DEFAULT_LANGUAGE.to_string()
            }
        };
        let code = match language_override {
            Some(code) => i18n::validate_code(code)?.to_string(),
            None => config.language.clone(),
        };
        let translations = Translations::load_or_empty(&resources, &code);
        debug!(resources = %resources.display(), language = %code, "opened devkit context");
        Ok(Self {
            resources,
            config,
            translations,
        })
    }

    pub fn resources(&self) -> &Path {
        &self.resources
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn translations(&self) -> &Translations {
        &self.translations
    }

    /// Shorthand for a translated label.
    pub fn tr(&self, key: &str) -> &str {
        self.translations.get(key)
    }

    pub fn locale(&self) -> Locale {
        Locale::from_code(self.translations.code())
    }

    pub fn convert(&self, input: &str, radix: Radix) -> Result<CmdResult> {
        commands::convert::run(input, radix)
    }

    pub fn list_references(&self) -> Result<CmdResult> {
        commands::reference::list(self.locale())
    }

    pub fn describe(&self, name: &str) -> Result<CmdResult> {
        commands::reference::show(name, self.locale())
    }

    pub fn languages(&self) -> Result<CmdResult> {
        commands::language::list(self.translations.code())
    }

    pub fn switch_language(&mut self, code: &str) -> Result<CmdResult> {
        let (result, translations) =
            commands::language::switch(&mut self.config, &self.resources, code)?;
        self.translations = translations;
        Ok(result)
    }

    pub fn config_action(&mut self, action: ConfigAction) -> Result<CmdResult> {
        let sets_language = matches!(&action, ConfigAction::Set(key, _) if key == "language");
        let result = commands::config::run(&mut self.config, &self.resources, action)?;
        if sets_language && self.translations.code() != self.config.language {
            self.translations = Translations::load_or_empty(&self.resources, &self.config.language);
        }
        Ok(result)
    }

    /// Writes the bundled resources, then reloads config and translations from them.
    pub fn init(&mut self, force: bool) -> Result<CmdResult> {
        let result = commands::init::run(&self.resources, force)?;
        self.config = AppConfig::load_or_default(&self.resources);
        let code = self.translations.code().to_string();
        self.translations = Translations::load_or_empty(&self.resources, &code);
        Ok(result)
    }

    /// Writes the current language and version back to `config.json`.
    pub fn persist(&self) -> Result<()> {
        self.config.save(&self.resources)
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, LanguageListing, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::MISSING;
    use tempfile::TempDir;

    fn initialized() -> (TempDir, DevkitApi) {
        let dir = TempDir::new().unwrap();
        let mut api = DevkitApi::open(dir.path(), None).unwrap();
        api.init(false).unwrap();
        (dir, api)
    }

    #[test]
    fn test_open_without_resources_uses_fallbacks() {
        let dir = TempDir::new().unwrap();
        let api = DevkitApi::open(dir.path(), None).unwrap();
        assert_eq!(api.config(), &AppConfig::default());
        assert_eq!(api.tr("title"), MISSING);
        assert_eq!(api.locale(), Locale::Zh);
    }

    #[test]
    fn test_init_reloads_translations() {
        let (_dir, api) = initialized();
        assert_eq!(api.tr("title"), "开发工具箱");
    }

    #[test]
    fn test_override_does_not_change_config() {
        let (dir, _) = initialized();
        let api = DevkitApi::open(dir.path(), Some("en")).unwrap();
        assert_eq!(api.tr("title"), "Developer Toolbox");
        assert_eq!(api.locale(), Locale::En);
        assert_eq!(api.config().language, "zh");
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let dir = TempDir::new().unwrap();
        assert!(DevkitApi::open(dir.path(), Some("../../x")).is_err());
    }

    #[test]
    fn test_describe_follows_active_locale() {
        let (dir, _) = initialized();
        let api = DevkitApi::open(dir.path(), Some("en")).unwrap();
        let result = api.describe("map").unwrap();
        assert!(result.entries[0].description.contains("associative"));
    }

    #[test]
    fn test_switch_language_updates_context() {
        let (dir, mut api) = initialized();
        api.switch_language("en").unwrap();
        assert_eq!(api.tr("btn-hex"), "Number Base Converter");

        let reopened = DevkitApi::open(dir.path(), None).unwrap();
        assert_eq!(reopened.config().language, "en");
    }

    #[test]
    fn test_config_set_language_reloads() {
        let (_dir, mut api) = initialized();
        api.config_action(ConfigAction::Set(
            "language".to_string(),
            "en".to_string(),
        ))
        .unwrap();
        assert_eq!(api.tr("title"), "Developer Toolbox");
    }

    #[test]
    fn test_config_set_rejects_path_like_language() {
        let (dir, mut api) = initialized();
        let result = api
            .config_action(ConfigAction::Set(
                "language".to_string(),
                "../escape".to_string(),
            ))
            .unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert_eq!(api.config().language, "zh");
        assert_eq!(AppConfig::load(dir.path()).unwrap().language, "zh");
    }

    #[test]
    fn test_open_ignores_path_like_language_in_config() {
        let (dir, _api) = initialized();
        std::fs::write(
            dir.path().join(crate::config::CONFIG_FILENAME),
            r#"{"language": "../escape", "version": "1.0.0"}"#,
        )
        .unwrap();

        let api = DevkitApi::open(dir.path(), None).unwrap();
        assert_eq!(api.config().language, "zh");
        assert_eq!(api.translations().code(), "zh");
        assert_eq!(api.tr("title"), "开发工具箱");
    }

    #[test]
    fn test_persist_writes_config() {
        let dir = TempDir::new().unwrap();
        let api = DevkitApi::open(dir.path(), None).unwrap();
        api.persist().unwrap();
        assert_eq!(AppConfig::load(dir.path()).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_convert_dispatch() {
        let dir = TempDir::new().unwrap();
        let api = DevkitApi::open(dir.path(), None).unwrap();
        let result = api.convert("1010", Radix::Binary).unwrap();
        assert_eq!(result.conversion.unwrap().decimal, "10");
    }
}
