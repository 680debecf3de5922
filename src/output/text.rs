use std::fmt::Write;
use std::path::PathBuf;

use indexmap::IndexMap;

use crate::aggregate::Summary;
use crate::counter::Report;
use crate::error::Result;

use super::{FILE_HEADERS, ReportFormatter, SUMMARY_HEADERS, file_rows, summary_rows};

/// Aligned plain-text table. The first column is left-aligned, counters right-aligned.
pub struct TextFormatter;

impl TextFormatter {
    fn render(headers: &[&str; 6], rows: &[[String; 6]]) -> String {
        let mut widths = headers.map(str::len);
        for row in rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let table_width = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
        let rule = "-".repeat(table_width);
        let mut output = String::new();

        let header_cells: Vec<String> = headers.iter().map(ToString::to_string).collect();
        writeln!(output, "{rule}").ok();
        write_row(&mut output, &header_cells, &widths);
        writeln!(output, "{rule}").ok();

        if let Some((total, body)) = rows.split_last() {
            for row in body {
                write_row(&mut output, row, &widths);
            }
            writeln!(output, "{rule}").ok();
            write_row(&mut output, total, &widths);
        }
        writeln!(output, "{rule}").ok();

        output
    }
}

fn write_row(output: &mut String, cells: &[String], widths: &[usize; 6]) {
    let mut line = String::new();
    for (i, (cell, &width)) in cells.iter().zip(widths).enumerate() {
        if i == 0 {
            write!(line, "{cell:<width$}").ok();
        } else {
            write!(line, "  {cell:>width$}").ok();
        }
    }
    writeln!(output, "{}", line.trim_end()).ok();
}

impl ReportFormatter for TextFormatter {
    fn format_summary(&self, summary: &Summary) -> Result<String> {
        Ok(Self::render(&SUMMARY_HEADERS, &summary_rows(summary)))
    }

    fn format_files(&self, files: &IndexMap<PathBuf, Report>, summary: &Summary) -> Result<String> {
        Ok(Self::render(&FILE_HEADERS, &file_rows(files, summary)))
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
