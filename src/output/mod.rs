mod csv;
mod json;
mod markdown;
mod path;
mod progress;
mod text;

pub use csv::CsvFormatter;
pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use path::display_path;
pub use progress::ScanProgress;
pub use text::TextFormatter;

use std::path::PathBuf;

use indexmap::IndexMap;

use crate::aggregate::Summary;
use crate::counter::Report;
use crate::error::Result;

/// Trait for rendering counting results.
pub trait ReportFormatter {
    /// Render one row per file type plus the grand total.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_summary(&self, summary: &Summary) -> Result<String>;

    /// Render one row per file plus the grand total taken from `summary`.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_files(&self, files: &IndexMap<PathBuf, Report>, summary: &Summary) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    #[must_use]
    pub fn formatter(self) -> Box<dyn ReportFormatter> {
        match self {
            Self::Text => Box::new(TextFormatter),
            Self::Json => Box::new(JsonFormatter),
            Self::Csv => Box::new(CsvFormatter),
            Self::Markdown => Box::new(MarkdownFormatter),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "markdown" | "md" => Ok(Self::Markdown),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Column headers shared by every tabular format.
pub(crate) const SUMMARY_HEADERS: [&str; 6] =
    ["Language", "Files", "Lines", "Code", "Comments", "Blanks"];
pub(crate) const FILE_HEADERS: [&str; 6] =
    ["File", "Language", "Lines", "Code", "Comments", "Blanks"];

pub(crate) fn counter_cells(report: &Report) -> [String; 4] {
    [
        report.total().to_string(),
        report.code.to_string(),
        report.comments.to_string(),
        report.blanks.to_string(),
    ]
}

/// Rows for the per-type table, total row last.
pub(crate) fn summary_rows(summary: &Summary) -> Vec<[String; 6]> {
    let mut rows: Vec<[String; 6]> = summary
        .by_type()
        .values()
        .map(|group| {
            let [lines, code, comments, blanks] = counter_cells(&group.report);
            [
                group.report.file_type.clone(),
                group.files.to_string(),
                lines,
                code,
                comments,
                blanks,
            ]
        })
        .collect();

    let total = summary.total();
    let [lines, code, comments, blanks] = counter_cells(&total.report);
    rows.push([
        total.report.file_type.clone(),
        total.files.to_string(),
        lines,
        code,
        comments,
        blanks,
    ]);
    rows
}

/// Rows for the per-file table, total row last.
pub(crate) fn file_rows(files: &IndexMap<PathBuf, Report>, summary: &Summary) -> Vec<[String; 6]> {
    let mut rows: Vec<[String; 6]> = files
        .iter()
        .map(|(path, report)| {
            let [lines, code, comments, blanks] = counter_cells(report);
            [
                display_path(path),
                report.file_type.clone(),
                lines,
                code,
                comments,
                blanks,
            ]
        })
        .collect();

    let total = summary.total();
    let [lines, code, comments, blanks] = counter_cells(&total.report);
    rows.push([
        format!("{} ({} files)", total.report.file_type, total.files),
        String::new(),
        lines,
        code,
        comments,
        blanks,
    ]);
    rows
}


#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
