use std::fmt::Write;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use rayon::prelude::*;

use crate::aggregate::{Summary, aggregate};
use crate::config::{
    Config, ConfigLoader, FileConfigLoader, FileSystem, UnknownPolicy, load_language_file,
    rules_from_entries,
};
use crate::counter::{LineClassifier, Report};
use crate::error::Result;
use crate::language::{LanguageRule, MarkerPolicy, RuleCatalog, builtin_rules};
use crate::output::{OutputFormat, ScanProgress};
use crate::reader::read_lines;
use crate::scanner::{DirectoryScanner, ExtensionFilter, FileScanner, GitignoreScanner};

/// Settings for one counting run. `None` fields fall back to the config file.
#[derive(Debug, Clone, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct CountOptions {
    pub paths: Vec<PathBuf>,
    pub config_path: Option<PathBuf>,
    pub no_config: bool,
    pub language_file: Option<PathBuf>,
    pub extensions: Option<Vec<String>>,
    pub exclude: Vec<String>,
    pub marker_policy: Option<MarkerPolicy>,
    pub unknown: Option<UnknownPolicy>,
    pub no_gitignore: bool,
    pub quiet: bool,
}

/// Everything a counting run produced, in scan order.
#[derive(Debug, Default)]
pub struct CountOutcome {
    pub files: IndexMap<PathBuf, Report>,
    pub summary: Summary,
    /// Files no rule claimed, with their extension if they have one.
    pub skipped: Vec<(PathBuf, Option<String>)>,
    /// Files that could not be read, with the error message.
    pub failed: Vec<(PathBuf, String)>,
}

impl CountOutcome {
    /// # Errors
    /// Returns an error if the formatter fails.
    pub fn render(&self, format: OutputFormat, by_file: bool) -> Result<String> {
        let formatter = format.formatter();
        if by_file {
            formatter.format_files(&self.files, &self.summary)
        } else {
            formatter.format_summary(&self.summary)
        }
    }
}

enum FileOutcome {
    Counted(Report),
    Skipped(Option<String>),
    Failed(String),
}

/// Load the config the options point at, then apply the option overrides.
///
/// # Errors
/// Returns an error if the config file cannot be read or parsed.
pub fn resolve_config<L: ConfigLoader>(loader: &L, options: &CountOptions) -> Result<Config> {
    let mut config = if options.no_config {
        Config::default()
    } else {
        let loaded = match options.config_path.as_deref() {
            Some(path) => loader.load_from_path(path)?,
            None => loader.load()?,
        };
        if let Some(source) = &loaded.source {
            tracing::debug!(path = %source.display(), "using config");
        }
        loaded.config
    };

    apply_overrides(&mut config, options);
    Ok(config)
}

fn apply_overrides(config: &mut Config, options: &CountOptions) {
    if let Some(language_file) = &options.language_file {
        config.count.language_file = Some(language_file.clone());
    }
    if let Some(extensions) = &options.extensions {
        config.count.extensions.clone_from(extensions);
    }
    if let Some(policy) = options.marker_policy {
        config.count.marker_policy = policy;
    }
    if let Some(policy) = options.unknown {
        config.count.unknown = policy;
    }
    if options.no_gitignore {
        config.scanner.gitignore = false;
    }
    config.scanner.exclude.extend(options.exclude.iter().cloned());
}

/// Base rules (language file or built-ins), then `[languages]` entries, then the fallback.
///
/// # Errors
/// Returns an error if the language file cannot be read or is malformed.
pub fn build_catalog<F: FileSystem>(config: &Config, fs: &F) -> Result<RuleCatalog> {
    let base = match &config.count.language_file {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading language definitions");
            load_language_file(fs, path)?
        }
        None => builtin_rules(),
    };

    let mut catalog = RuleCatalog::build(base);
    for rule in rules_from_entries(&config.languages) {
        catalog.register(rule);
    }

    if config.count.unknown == UnknownPolicy::Fallback {
        catalog = catalog.with_fallback(LanguageRule::plain_text());
    }
    Ok(catalog)
}

/// Enumerate the files under `roots` the config lets through.
///
/// Without an explicit extension list only extensions `catalog` claims are
/// collected from directories. Roots that are files are always kept.
///
/// # Errors
/// Returns an error if an exclude glob is invalid or a root does not exist.
pub fn scan(config: &Config, catalog: &RuleCatalog, roots: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let exclude = &config.scanner.exclude;
    let filter = if config.count.extensions.is_empty() {
        ExtensionFilter::for_catalog(catalog, exclude)?
    } else {
        ExtensionFilter::new(config.count.extensions.iter().cloned(), exclude)?
    };
    if config.scanner.gitignore {
        GitignoreScanner::new(filter).scan_all(roots)
    } else {
        DirectoryScanner::new(filter).scan_all(roots)
    }
}

fn classify_file(path: &Path, catalog: &RuleCatalog, policy: MarkerPolicy) -> FileOutcome {
    let Some(rule) = catalog.lookup_path(path) else {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned());
        tracing::warn!(
            "No rule for file type '{}' in file {}, skipping",
            extension.as_deref().unwrap_or(""),
            path.display()
        );
        return FileOutcome::Skipped(extension);
    };

    match read_lines(path) {
        Ok(lines) => FileOutcome::Counted(LineClassifier::with_policy(rule, policy).classify(&lines)),
        Err(e) => {
            tracing::warn!("{e}");
            FileOutcome::Failed(e.to_string())
        }
    }
}

/// Classify `files` in parallel, keeping their order in the result.
#[must_use]
pub fn count_files(
    files: &[PathBuf],
    catalog: &RuleCatalog,
    policy: MarkerPolicy,
    progress: &ScanProgress,
) -> CountOutcome {
    let results: Vec<FileOutcome> = files
        .par_iter()
        .map(|path| {
            let outcome = classify_file(path, catalog, policy);
            progress.inc();
            outcome
        })
        .collect();
    progress.finish();

    let mut outcome = CountOutcome::default();
    for (path, result) in files.iter().zip(results) {
        match result {
            FileOutcome::Counted(report) => {
                outcome.files.insert(path.clone(), report);
            }
            FileOutcome::Skipped(extension) => outcome.skipped.push((path.clone(), extension)),
            FileOutcome::Failed(message) => outcome.failed.push((path.clone(), message)),
        }
    }
    outcome.summary = aggregate(&outcome.files);

    tracing::info!(
        scanned = files.len(),
        classified = outcome.files.len(),
        skipped = outcome.skipped.len(),
        failed = outcome.failed.len(),
        "counting finished"
    );
    outcome
}

/// Run a complete count with an explicit config and filesystem.
///
/// # Errors
/// Returns an error if the catalog cannot be built or scanning fails.
pub fn run_with<F: FileSystem>(config: &Config, fs: &F, options: &CountOptions) -> Result<CountOutcome> {
    let catalog = build_catalog(config, fs)?;
    let roots = scan_roots(options);
    let files = scan(config, &catalog, &roots)?;
    tracing::info!(files = files.len(), "scan finished");

    let progress = ScanProgress::new(files.len() as u64, options.quiet);
    Ok(count_files(&files, &catalog, config.count.marker_policy, &progress))
}

/// Resolve config from disk and count.
///
/// # Errors
/// Returns an error if configuration, catalog construction, or scanning fails.
pub fn run(options: &CountOptions) -> Result<CountOutcome> {
    let loader = FileConfigLoader::new();
    let config = resolve_config(&loader, options)?;
    run_with(&config, loader.fs(), options)
}

fn scan_roots(options: &CountOptions) -> Vec<PathBuf> {
    if options.paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        options.paths.clone()
    }
}

/// One block per rule: name, extensions, line markers, multi-line pairs.
#[must_use]
pub fn format_languages(catalog: &RuleCatalog) -> String {
    let mut output = String::new();
    for rule in catalog.rules() {
        write_rule(&mut output, rule, "");
    }
    if let Some(fallback) = catalog.fallback() {
        write_rule(&mut output, fallback, " (fallback)");
    }
    output
}

fn write_rule(output: &mut String, rule: &LanguageRule, suffix: &str) {
    let or_none = |items: Vec<String>| {
        if items.is_empty() {
            "-".to_string()
        } else {
            items.join(" ")
        }
    };

    writeln!(output, "{}{suffix}", rule.name).ok();
    writeln!(output, "  extensions: {}", or_none(rule.extensions.clone())).ok();
    writeln!(output, "  line comments: {}", or_none(rule.line_comment.clone())).ok();
    let pairs = rule
        .multi_line
        .iter()
        .map(|(start, end)| format!("{start} {end}"))
        .collect();
    writeln!(output, "  multi-line: {}", or_none(pairs)).ok();
}

/// Print the resolved catalog.
///
/// # Errors
/// Returns an error if the config or language file cannot be loaded.
pub fn list_languages(options: &CountOptions) -> Result<String> {
    let loader = FileConfigLoader::new();
    let config = resolve_config(&loader, options)?;
    let catalog = build_catalog(&config, loader.fs())?;
    Ok(format_languages(&catalog))
}

#[cfg(test)]
#[path = "count_tests.rs"]
mod tests;
