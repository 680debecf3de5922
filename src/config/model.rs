use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::language::MarkerPolicy;

use super::LanguageEntry;

/// What to do with files whose extension no rule claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownPolicy {
    /// Leave the file out of the counts and report it as skipped.
    #[default]
    Skip,
    /// Count the file with the plain text rule.
    Fallback,
}

impl std::str::FromStr for UnknownPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "skip" => Ok(Self::Skip),
            "fallback" => Ok(Self::Fallback),
            _ => Err(format!("Unknown policy for unrecognized files: {s}")),
        }
    }
}

/// Line classification settings [count].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CountConfig {
    #[serde(default)]
    pub marker_policy: MarkerPolicy,

    #[serde(default)]
    pub unknown: UnknownPolicy,

    /// Language document replacing the built-in rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_file: Option<PathBuf>,

    /// Extensions collected from directories. Empty means every extension the catalog claims.
    #[serde(default)]
    pub extensions: Vec<String>,
}

/// File discovery settings [scanner].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScannerConfig {
    /// Respect .gitignore rules (default: true)
    #[serde(default = "default_true")]
    pub gitignore: bool,

    /// Glob patterns for files and directories to leave out.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            gitignore: true,
            exclude: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub count: CountConfig,

    #[serde(default)]
    pub scanner: ScannerConfig,

    /// Extra languages [languages.X], registered after the base rules.
    #[serde(default)]
    pub languages: IndexMap<String, LanguageEntry>,
}

const fn default_true() -> bool {
    true
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
