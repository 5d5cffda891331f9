use crate::commands::{CmdMessage, CmdResult, LanguageListing};
use crate::config::AppConfig;
use crate::error::Result;
use crate::i18n::{self, Translations, LANGUAGES};
use std::path::Path;

pub fn list(active: &str) -> Result<CmdResult> {
    let languages = LANGUAGES
        .iter()
        .map(|&(code, name)| LanguageListing {
            code,
            name,
            active: code == active,
        })
        .collect();
    Ok(CmdResult::default().with_languages(languages))
}

/// Makes `code` the active language, reloads its table and persists the choice.
pub fn switch(
    config: &mut AppConfig,
    resources: &Path,
    code: &str,
) -> Result<(CmdResult, Translations)> {
    let code = i18n::validate_code(code)?;
    let mut result = CmdResult::default();

    let translations = match Translations::load(resources, code) {
        Ok(t) => t,
        Err(e) => {
            result.add_message(CmdMessage::warning(format!(
                "{}; labels will show as \"{}\"",
                e,
                i18n::MISSING
            )));
            Translations::empty(code)
        }
    };

    config.language = code.to_string();
    config.save(resources)?;

    let name = i18n::language_name(code).unwrap_or(code);
    result.add_message(CmdMessage::success(format!(
        "{} {}",
        translations.get("language.switched"),
        name
    )));
    Ok((result, translations))
}
