use serde::{Deserialize, Serialize};

/// Comment syntax and file extensions for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageRule {
    pub name: String,
    /// Extensions without the leading dot, matched case-sensitively.
    pub extensions: Vec<String>,
    pub line_comment: Vec<String>,
    pub multi_line: Vec<(String, String)>,
}

impl LanguageRule {
    #[must_use]
    pub fn new(
        name: &str,
        extensions: Vec<&str>,
        line_comment: Vec<&str>,
        multi_line: Vec<(&str, &str)>,
    ) -> Self {
        Self {
            name: name.to_string(),
            extensions: extensions.into_iter().map(String::from).collect(),
            line_comment: line_comment.into_iter().map(String::from).collect(),
            multi_line: multi_line
                .into_iter()
                .map(|(s, e)| (s.to_string(), e.to_string()))
                .collect(),
        }
    }

    /// Catch-all rule applied to unrecognized extensions when a fallback is enabled.
    #[must_use]
    pub fn plain_text() -> Self {
        Self::new("Plain Text", vec!["txt"], vec!["//"], vec![])
    }

    /// A rule without extensions can never be selected by a catalog lookup.
    #[must_use]
    pub fn is_reachable(&self) -> bool {
        !self.extensions.is_empty()
    }
}

/// Which of a rule's configured comment markers the classifier consults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerPolicy {
    /// Every line marker and every multi-line pair is honored.
    #[default]
    All,
    /// Only the first line marker and the first multi-line pair are honored.
    #[serde(rename = "first")]
    FirstOnly,
}

impl MarkerPolicy {
    #[must_use]
    pub fn line_markers(self, rule: &LanguageRule) -> &[String] {
        match self {
            Self::All => &rule.line_comment,
            Self::FirstOnly => first_only(&rule.line_comment),
        }
    }

    #[must_use]
    pub fn multi_line_pairs(self, rule: &LanguageRule) -> &[(String, String)] {
        match self {
            Self::All => &rule.multi_line,
            Self::FirstOnly => first_only(&rule.multi_line),
        }
    }
}

fn first_only<T>(items: &[T]) -> &[T] {
    &items[..items.len().min(1)]
}

impl std::str::FromStr for MarkerPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "first" | "first-only" => Ok(Self::FirstOnly),
            _ => Err(format!("Unknown marker policy: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "rule_tests.rs"]
mod tests;
