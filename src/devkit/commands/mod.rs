use crate::config::AppConfig;
use crate::numeric::Conversion;
use crate::radix::Radix;
use crate::reference::LocalizedEntry;
use serde::Serialize;
use std::path::PathBuf;

pub mod config;
pub mod convert;
pub mod init;
pub mod language;
pub mod reference;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One row of the language switcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageListing {
    pub code: &'static str,
    pub name: &'static str,
    pub active: bool,
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_radix: Option<Radix>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversion: Option<Conversion>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub entries: Vec<LocalizedEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<AppConfig>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<LanguageListing>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub written_files: Vec<PathBuf>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_conversion(mut self, radix: Radix, conversion: Conversion) -> Self {
        self.source_radix = Some(radix);
        self.conversion = Some(conversion);
        self
    }

    pub fn with_entries(mut self, entries: Vec<LocalizedEntry>) -> Self {
        self.entries = entries;
        self
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_languages(mut self, languages: Vec<LanguageListing>) -> Self {
        self.languages = languages;
        self
    }

    pub fn with_written_files(mut self, files: Vec<PathBuf>) -> Self {
        self.written_files = files;
        self
    }
}
