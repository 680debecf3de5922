mod filter;

pub use filter::{ExtensionFilter, FileFilter};

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use walkdir::WalkDir;

use crate::error::{LoccError, Result};

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Return the matching files under `root`, sorted by path.
    ///
    /// A root that is itself a file is returned as-is without filtering.
    ///
    /// # Errors
    /// Returns `PathNotFound` if `root` does not exist.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;

    /// Scan several roots, concatenating results in root order.
    ///
    /// # Errors
    /// Returns the first error produced by [`FileScanner::scan`].
    fn scan_all(&self, roots: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for root in roots {
            files.extend(self.scan(root)?);
        }
        Ok(files)
    }
}

fn check_root(root: &Path) -> Result<Option<Vec<PathBuf>>> {
    if !root.exists() {
        return Err(LoccError::PathNotFound(root.to_path_buf()));
    }
    if root.is_file() {
        return Ok(Some(vec![root.to_path_buf()]));
    }
    Ok(None)
}

fn is_git_dir(name: &OsStr) -> bool {
    name == ".git"
}

/// Walks every file below the root, ignore files are not consulted.
pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }

    fn scan_impl(&self, root: &Path) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = WalkDir::new(root)
            .into_iter()
            .filter_entry(|e| !is_git_dir(e.file_name()))
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    tracing::warn!("walk error: {err}");
                    None
                }
            })
            .filter(|e| e.file_type().is_file())
            .map(walkdir::DirEntry::into_path)
            .filter(|p| self.filter.should_include(p))
            .collect();
        files.sort();
        files
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if let Some(single) = check_root(root)? {
            return Ok(single);
        }
        Ok(self.scan_impl(root))
    }
}

/// Walks the root honoring `.gitignore` and `.ignore` files. Hidden files are kept.
pub struct GitignoreScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> GitignoreScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }

    fn scan_impl(&self, root: &Path) -> Vec<PathBuf> {
        let walker = WalkBuilder::new(root)
            .hidden(false)
            .git_ignore(true)
            .git_exclude(true)
            .ignore(true)
            .require_git(false)
            .filter_entry(|e| !is_git_dir(e.file_name()))
            .build();

        let mut files: Vec<PathBuf> = walker
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    tracing::warn!("walk error: {err}");
                    None
                }
            })
            .filter(|e| e.file_type().is_some_and(|ft| ft.is_file()))
            .map(ignore::DirEntry::into_path)
            .filter(|p| self.filter.should_include(p))
            .collect();
        files.sort();
        files
    }
}

impl<F: FileFilter> FileScanner for GitignoreScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if let Some(single) = check_root(root)? {
            return Ok(single);
        }
        Ok(self.scan_impl(root))
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
