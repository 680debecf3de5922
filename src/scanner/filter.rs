use std::collections::HashSet;
use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{LoccError, Result};
use crate::language::RuleCatalog;

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Compiled `--exclude` globs.
#[derive(Debug, Clone)]
pub struct ExcludeSet {
    globs: GlobSet,
}

impl ExcludeSet {
    /// # Errors
    /// Returns `InvalidPattern` naming the first glob that does not parse.
    pub fn new(patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|source| LoccError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
            builder.add(glob);
        }

        let globs = builder.build().map_err(|source| LoccError::InvalidPattern {
            pattern: patterns.join(", "),
            source,
        })?;
        Ok(Self { globs })
    }

    /// A leading `./` is ignored, so `vendor/**` matches `./vendor/lib.js`.
    #[must_use]
    pub fn matches(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(".").unwrap_or(path);
        self.globs.is_match(relative) || self.globs.is_match(path)
    }
}

/// Lets through files whose extension is in the allowed set and that no
/// exclude glob matches. Files without an extension never pass.
#[derive(Debug, Clone)]
pub struct ExtensionFilter {
    allowed: HashSet<String>,
    exclude: ExcludeSet,
}

impl ExtensionFilter {
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new<I, S>(extensions: I, exclude_patterns: &[String]) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            allowed: extensions.into_iter().map(Into::into).collect(),
            exclude: ExcludeSet::new(exclude_patterns)?,
        })
    }

    /// Allow exactly the extensions some rule in `catalog` claims.
    ///
    /// A catalog fallback does not widen the set: it only applies to files
    /// named directly as roots.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn for_catalog(catalog: &RuleCatalog, exclude_patterns: &[String]) -> Result<Self> {
        Self::new(catalog.extensions(), exclude_patterns)
    }

    pub fn allows_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.allowed.contains(ext))
    }

    pub fn is_excluded(&self, path: &Path) -> bool {
        self.exclude.matches(path)
    }
}

impl FileFilter for ExtensionFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.allows_extension(path) && !self.is_excluded(path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
