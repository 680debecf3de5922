use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoccError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid language definition '{language}': {message}")]
    LanguageDefinition { language: String, message: String },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Path not found: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON parse error in {}: {source}", path.display())]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl LoccError {
    pub(crate) fn language(language: &str, message: impl Into<String>) -> Self {
        Self::LanguageDefinition {
            language: language.to_string(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LoccError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
