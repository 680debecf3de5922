use std::path::PathBuf;

use indexmap::IndexMap;

use crate::aggregate::Summary;
use crate::counter::Report;
use crate::error::Result;

use super::{FILE_HEADERS, ReportFormatter, SUMMARY_HEADERS, file_rows, summary_rows};

/// Comma-separated output: header row, data rows, total row.
pub struct CsvFormatter;

impl CsvFormatter {
    fn render(headers: &[&str; 6], rows: &[[String; 6]]) -> String {
        let mut output = String::new();
        push_record(&mut output, headers.iter().copied());
        for row in rows {
            push_record(&mut output, row.iter().map(String::as_str));
        }
        output
    }
}

fn push_record<'a>(output: &mut String, cells: impl Iterator<Item = &'a str>) {
    let fields: Vec<String> = cells.map(quote).collect();
    output.push_str(&fields.join(","));
    output.push('\n');
}

fn quote(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

impl ReportFormatter for CsvFormatter {
    fn format_summary(&self, summary: &Summary) -> Result<String> {
        Ok(Self::render(&SUMMARY_HEADERS, &summary_rows(summary)))
    }

    fn format_files(&self, files: &IndexMap<PathBuf, Report>, summary: &Summary) -> Result<String> {
        Ok(Self::render(&FILE_HEADERS, &file_rows(files, summary)))
    }
}

#[cfg(test)]
#[path = "csv_tests.rs"]
mod tests;
