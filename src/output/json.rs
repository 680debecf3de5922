use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Serialize;

use crate::aggregate::{Aggregate, Summary};
use crate::counter::Report;
use crate::error::Result;

use super::{ReportFormatter, display_path};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonSummaryOutput {
    languages: Vec<JsonLanguage>,
    total: JsonTotal,
}

#[derive(Serialize)]
struct JsonFilesOutput {
    files: Vec<JsonFile>,
    total: JsonTotal,
}

#[derive(Serialize)]
struct JsonLanguage {
    language: String,
    files: usize,
    lines: usize,
    code: usize,
    comments: usize,
    blanks: usize,
}

#[derive(Serialize)]
struct JsonFile {
    path: String,
    language: String,
    lines: usize,
    code: usize,
    comments: usize,
    blanks: usize,
}

#[derive(Serialize)]
struct JsonTotal {
    files: usize,
    lines: usize,
    code: usize,
    comments: usize,
    blanks: usize,
}

impl From<&Aggregate> for JsonLanguage {
    fn from(group: &Aggregate) -> Self {
        Self {
            language: group.report.file_type.clone(),
            files: group.files,
            lines: group.report.total(),
            code: group.report.code,
            comments: group.report.comments,
            blanks: group.report.blanks,
        }
    }
}

impl From<&Aggregate> for JsonTotal {
    fn from(total: &Aggregate) -> Self {
        Self {
            files: total.files,
            lines: total.report.total(),
            code: total.report.code,
            comments: total.report.comments,
            blanks: total.report.blanks,
        }
    }
}

impl ReportFormatter for JsonFormatter {
    fn format_summary(&self, summary: &Summary) -> Result<String> {
        let output = JsonSummaryOutput {
            languages: summary.by_type().values().map(JsonLanguage::from).collect(),
            total: summary.total().into(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }

    fn format_files(&self, files: &IndexMap<PathBuf, Report>, summary: &Summary) -> Result<String> {
        let output = JsonFilesOutput {
            files: files
                .iter()
                .map(|(path, report)| JsonFile {
                    path: display_path(path),
                    language: report.file_type.clone(),
                    lines: report.total(),
                    code: report.code,
                    comments: report.comments,
                    blanks: report.blanks,
                })
                .collect(),
            total: summary.total().into(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
