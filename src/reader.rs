//! Read source files into decoded lines.

use std::path::Path;

use crate::error::{LoccError, Result};

/// Files above this size are logged before being read (1 MB).
const LARGE_FILE_WARN: u64 = 1_000_000;

/// Decode bytes as UTF-8, replacing invalid sequences, and split into lines.
#[must_use]
pub fn decode_lines(bytes: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(bytes)
        .lines()
        .map(str::to_owned)
        .collect()
}

/// Read a file into lines. Invalid UTF-8 never fails the read.
///
/// # Errors
/// Returns `FileRead` if the file cannot be opened or read.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let bytes = std::fs::read(path).map_err(|source| LoccError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    if bytes.len() as u64 > LARGE_FILE_WARN {
        tracing::info!(path = %path.display(), size = bytes.len(), "reading large file");
    }

    Ok(decode_lines(&bytes))
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
