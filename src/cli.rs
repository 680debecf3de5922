use std::path::PathBuf;

use clap::Parser;

use crate::commands::CountOptions;
use crate::config::UnknownPolicy;
use crate::language::MarkerPolicy;
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "locc")]
#[command(author, version, about = "Count code, comment and blank lines per language")]
#[command(long_about = "Classify every line of the given files as code, comment or blank \
    and summarize the counts per language.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    2 - Configuration or runtime error")]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Files or directories to count
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Report one row per file instead of one per language
    #[arg(long)]
    pub by_file: bool,

    /// Output format [possible values: text, json, csv, markdown]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long)]
    pub no_config: bool,

    /// Language definition file (JSON, or TOML with a .toml extension)
    #[arg(short, long)]
    pub languages: Option<PathBuf>,

    /// Only count these extensions (comma-separated, e.g., rs,go,py)
    #[arg(long, value_delimiter = ',')]
    pub ext: Option<Vec<String>>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Which comment markers are consulted [possible values: all, first]
    #[arg(long)]
    pub marker_policy: Option<MarkerPolicy>,

    /// What to do with files no language claims [possible values: skip, fallback]
    #[arg(long)]
    pub unknown: Option<UnknownPolicy>,

    /// Do not honor .gitignore and .ignore files
    #[arg(long)]
    pub no_gitignore: bool,

    /// Print the resolved language catalog and exit
    #[arg(long)]
    pub list_languages: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors and hide the progress bar
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    #[must_use]
    pub fn count_options(&self) -> CountOptions {
        CountOptions {
            paths: self.paths.clone(),
            config_path: self.config.clone(),
            no_config: self.no_config,
            language_file: self.languages.clone(),
            extensions: self.ext.clone(),
            exclude: self.exclude.clone(),
            marker_policy: self.marker_policy,
            unknown: self.unknown,
            no_gitignore: self.no_gitignore,
            quiet: self.quiet,
        }
    }

    /// Log filter directive for the chosen verbosity.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
