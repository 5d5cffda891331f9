use crate::radix::Radix;
use std::path::PathBuf;
use thiserror::Error;

/// Rejected input for the base converter. No partial result accompanies it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Please enter a number")]
    Empty,

    #[error("{}", invalid_digits(.radix, .input))]
    InvalidDigits { radix: Radix, input: String },
}

fn invalid_digits(radix: &Radix, input: &str) -> String {
    match radix {
        Radix::Decimal => format!("{}: '{}'", radix.invalid_digits_message(), input),
        _ => radix.invalid_digits_message().to_string(),
    }
}

#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("config file not found: {0}")]
    Missing(PathBuf),

    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed config {path}: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Error, Debug)]
pub enum LanguageLoadError {
    #[error("failed to read language file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed language file {path}: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("language file {0} must contain a JSON object")]
    NotAnObject(PathBuf),
}

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("icon file '{0}' doesn't exist")]
    MissingIcon(PathBuf),

    #[error("failed to launch {tool}: {source}")]
    Launch {
        tool: String,
        source: std::io::Error,
    },

    #[error("{tool} exited with {status}: {stderr}")]
    ToolFailed {
        tool: String,
        status: String,
        stderr: String,
    },

    #[error("fail to generate executable: {0}")]
    MissingArtifact(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum DevkitError {
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error(transparent)]
    Config(#[from] ConfigLoadError),

    #[error(transparent)]
    Language(#[from] LanguageLoadError),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error("Unknown data structure: {0}")]
    StructureNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, DevkitError>;
