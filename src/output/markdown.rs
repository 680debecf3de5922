use std::fmt::Write;
use std::path::PathBuf;

use indexmap::IndexMap;

use crate::aggregate::Summary;
use crate::counter::Report;
use crate::error::Result;

use super::{FILE_HEADERS, ReportFormatter, SUMMARY_HEADERS, file_rows, summary_rows};

/// GitHub-flavored table, total row in bold.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    fn render(headers: &[&str; 6], rows: &[[String; 6]]) -> String {
        let mut output = String::new();

        writeln!(output, "| {} |", headers.join(" | ")).ok();
        writeln!(output, "|:---|---:|---:|---:|---:|---:|").ok();

        if let Some((total, body)) = rows.split_last() {
            for row in body {
                let cells: Vec<String> = row.iter().map(|cell| escape(cell)).collect();
                writeln!(output, "| {} |", cells.join(" | ")).ok();
            }
            let cells: Vec<String> = total
                .iter()
                .map(|cell| {
                    if cell.is_empty() {
                        String::new()
                    } else {
                        format!("**{}**", escape(cell))
                    }
                })
                .collect();
            writeln!(output, "| {} |", cells.join(" | ")).ok();
        }

        output
    }
}

fn escape(cell: &str) -> String {
    cell.replace('|', "\\|")
}

impl ReportFormatter for MarkdownFormatter {
    fn format_summary(&self, summary: &Summary) -> Result<String> {
        Ok(Self::render(&SUMMARY_HEADERS, &summary_rows(summary)))
    }

    fn format_files(&self, files: &IndexMap<PathBuf, Report>, summary: &Summary) -> Result<String> {
        Ok(Self::render(&FILE_HEADERS, &file_rows(files, summary)))
    }
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
