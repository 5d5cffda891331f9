//! Translation tables loaded from `<resources>/i18n/<code>.json`.
//!
//! Keys are dotted paths into nested JSON objects (`number-converter.input`).
//! A key that does not resolve to a string yields [`MISSING`] instead of an error.

use crate::error::{self, DevkitError, LanguageLoadError};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const MISSING: &str = "Missing translation";
pub const DEFAULT_LANGUAGE: &str = "zh";
const I18N_DIR: &str = "i18n";

/// Languages offered by the language switcher, with their native names.
pub const LANGUAGES: &[(&str, &str)] = &[("zh", "简体中文"), ("en", "English")];

/// Catalogs compiled into the binary; `init` writes them to disk.
pub const BUNDLED: &[(&str, &str)] = &[
    ("zh", include_str!("../../i18n/zh.json")),
    ("en", include_str!("../../i18n/en.json")),
];

/// Language codes name files on disk, so they are restricted to a safe charset.
pub fn validate_code(code: &str) -> error::Result<&str> {
    let code = code.trim();
    let valid = !code.is_empty()
        && code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(code)
    } else {
        Err(DevkitError::Api(format!("Invalid language code: {}", code)))
    }
}

pub fn language_file(resources: &Path, code: &str) -> PathBuf {
    resources.join(I18N_DIR).join(format!("{}.json", code))
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Translations {
    code: String,
    root: Map<String, Value>,
}

impl Translations {
    /// An empty table: every key resolves to [`MISSING`].
    pub fn empty(code: &str) -> Self {
        Self {
            code: code.to_string(),
            root: Map::new(),
        }
    }

    pub fn from_json(code: &str, source: &str) -> Result<Self, serde_json::Error> {
        let root: Map<String, Value> = serde_json::from_str(source)?;
        Ok(Self {
            code: code.to_string(),
            root,
        })
    }

    pub fn load(resources: &Path, code: &str) -> Result<Self, LanguageLoadError> {
        let path = language_file(resources, code);
        let content = fs::read_to_string(&path).map_err(|source| LanguageLoadError::Io {
            path: path.clone(),
            source,
        })?;
        let value: Value =
            serde_json::from_str(&content).map_err(|source| LanguageLoadError::Malformed {
                path: path.clone(),
                source,
            })?;
        match value {
            Value::Object(root) => {
                debug!(path = %path.display(), keys = root.len(), "loaded translations");
                Ok(Self {
                    code: code.to_string(),
                    root,
                })
            }
            _ => Err(LanguageLoadError::NotAnObject(path)),
        }
    }

    pub fn load_or_empty(resources: &Path, code: &str) -> Self {
        Self::load(resources, code).unwrap_or_else(|e| {
            warn!(language = code, error = %e, "failed to load language file, using empty table");
            Self::empty(code)
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn get(&self, key: &str) -> &str {
        let mut parts = key.split('.');
        let Some(first) = parts.next() else {
            return MISSING;
        };
        let mut node = match self.root.get(first) {
            Some(node) => node,
            None => return MISSING,
        };
        for part in parts {
            node = match node.get(part) {
                Some(next) => next,
                None => return MISSING,
            };
        }
        node.as_str().unwrap_or(MISSING)
    }
}

pub fn language_name(code: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}
