use std::collections::HashMap;
use std::path::Path;

use super::LanguageRule;
use super::builtin::builtin_rules;

/// An extension claimed by more than one rule. The later rule always wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub extension: String,
    pub overridden: String,
    pub winner: String,
}

/// Extension to rule lookup table.
///
/// Registration is last-writer-wins: when two rules claim the same extension the
/// rule registered later owns it, and the override is recorded in
/// [`RuleCatalog::collisions`]. Lookups are exact, case-sensitive matches.
#[derive(Debug, Clone)]
pub struct RuleCatalog {
    rules: Vec<LanguageRule>,
    extension_map: HashMap<String, usize>,
    fallback: Option<LanguageRule>,
    collisions: Vec<Collision>,
}

impl RuleCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            extension_map: HashMap::new(),
            fallback: None,
            collisions: Vec::new(),
        }
    }

    #[must_use]
    pub fn build(rules: impl IntoIterator<Item = LanguageRule>) -> Self {
        let mut catalog = Self::new();
        for rule in rules {
            catalog.register(rule);
        }
        catalog
    }

    pub fn register(&mut self, rule: LanguageRule) {
        if !rule.is_reachable() {
            tracing::warn!(language = %rule.name, "language has no extensions and can never match");
        }

        let idx = self.rules.len();
        for ext in &rule.extensions {
            if let Some(previous) = self.extension_map.insert(ext.clone(), idx)
                && previous != idx
            {
                let overridden = self.rules[previous].name.clone();
                tracing::warn!(
                    extension = %ext,
                    overridden = %overridden,
                    winner = %rule.name,
                    "extension claimed by multiple languages, keeping the later one"
                );
                self.collisions.push(Collision {
                    extension: ext.clone(),
                    overridden,
                    winner: rule.name.clone(),
                });
            }
        }
        self.rules.push(rule);
    }

    /// Attach a rule returned for every extension the catalog does not know.
    #[must_use]
    pub fn with_fallback(mut self, rule: LanguageRule) -> Self {
        self.fallback = Some(rule);
        self
    }

    /// Resolve an extension, falling back to the default rule when one is set.
    #[must_use]
    pub fn lookup(&self, ext: &str) -> Option<&LanguageRule> {
        self.lookup_exact(ext).or(self.fallback.as_ref())
    }

    /// Resolve an extension against registered rules only, ignoring any fallback.
    #[must_use]
    pub fn lookup_exact(&self, ext: &str) -> Option<&LanguageRule> {
        self.extension_map
            .get(ext)
            .map(|&idx| &self.rules[idx])
    }

    /// Resolve a file by its extension. Files without one only match the fallback.
    #[must_use]
    pub fn lookup_path(&self, path: &Path) -> Option<&LanguageRule> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) => self.lookup(ext),
            None => self.fallback.as_ref(),
        }
    }

    #[must_use]
    pub fn rules(&self) -> &[LanguageRule] {
        &self.rules
    }

    /// Every registered extension, sorted.
    #[must_use]
    pub fn extensions(&self) -> Vec<String> {
        let mut extensions: Vec<String> = self.extension_map.keys().cloned().collect();
        extensions.sort();
        extensions
    }

    #[must_use]
    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }

    #[must_use]
    pub const fn fallback(&self) -> Option<&LanguageRule> {
        self.fallback.as_ref()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleCatalog {
    fn default() -> Self {
        Self::build(builtin_rules())
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
