//! Language definition documents.
//!
//! A document maps a language name to its extensions and comment syntax:
//!
//! ```json
//! {
//!   "Java": { "extensions": ["java"], "line_comment": ["//"], "multi_line": [["/*", "*/"]] },
//!   "SQL":  { "extensions": ["sql"], "line_comment": ["--"] }
//! }
//! ```
//!
//! Unknown keys inside an entry are ignored so richer language databases can be
//! fed in directly. Entry order is preserved and decides extension collisions.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{LoccError, Result};
use crate::language::LanguageRule;

use super::FileSystem;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageEntry {
    pub extensions: Vec<String>,

    #[serde(default)]
    pub line_comment: Vec<String>,

    #[serde(default)]
    pub multi_line: Vec<(String, String)>,
}

impl LanguageEntry {
    #[must_use]
    pub fn into_rule(self, name: &str) -> LanguageRule {
        LanguageRule {
            name: name.to_string(),
            extensions: self.extensions,
            line_comment: self.line_comment,
            multi_line: self.multi_line,
        }
    }
}

/// Turn ordered entries into rules, keeping document order.
#[must_use]
pub fn rules_from_entries(entries: &IndexMap<String, LanguageEntry>) -> Vec<LanguageRule> {
    entries
        .iter()
        .map(|(name, entry)| entry.clone().into_rule(name))
        .collect()
}

/// Parse a JSON language document.
///
/// # Errors
/// Returns `JsonParse` if the document is not a JSON object, and
/// `LanguageDefinition` naming the entry if any entry is malformed.
pub fn parse_json(content: &str, path: &Path) -> Result<Vec<LanguageRule>> {
    let raw: IndexMap<String, serde_json::Value> =
        serde_json::from_str(content).map_err(|source| LoccError::JsonParse {
            path: path.to_path_buf(),
            source,
        })?;

    raw.into_iter()
        .map(|(name, value)| {
            serde_json::from_value::<LanguageEntry>(value)
                .map(|entry| entry.into_rule(&name))
                .map_err(|e| LoccError::language(&name, e.to_string()))
        })
        .collect()
}

/// Parse a TOML language document, one table per language.
///
/// # Errors
/// Returns `TomlParse` for invalid TOML and `LanguageDefinition` naming the entry
/// if any entry is malformed.
pub fn parse_toml(content: &str) -> Result<Vec<LanguageRule>> {
    let raw: IndexMap<String, toml::Value> = toml::from_str(content)?;

    raw.into_iter()
        .map(|(name, value)| {
            value
                .try_into::<LanguageEntry>()
                .map(|entry| entry.into_rule(&name))
                .map_err(|e| LoccError::language(&name, e.to_string()))
        })
        .collect()
}

/// Load a language document, choosing the parser from the file extension.
///
/// # Errors
/// Returns `FileRead` if the file cannot be read, a parse error, or `Config`
/// if the document defines no languages.
pub fn load_language_file<F: FileSystem>(fs: &F, path: &Path) -> Result<Vec<LanguageRule>> {
    let content = fs
        .read_to_string(path)
        .map_err(|source| LoccError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

    let rules = match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => parse_toml(&content)?,
        _ => parse_json(&content, path)?,
    };
    if rules.is_empty() {
        return Err(LoccError::Config(format!(
            "language file {} defines no languages",
            path.display()
        )));
    }

    tracing::debug!(path = %path.display(), languages = rules.len(), "loaded language file");
    Ok(rules)
}

#[cfg(test)]
#[path = "language_file_tests.rs"]
mod tests;
