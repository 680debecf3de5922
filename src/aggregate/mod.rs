//! Roll per-file reports up into per-type totals and a grand total.
//!
//! Groups keep the order in which their type was first seen, so the output is
//! stable for a stable input order. Merging is commutative and associative over
//! the counters, which lets callers aggregate partial batches independently.

use indexmap::IndexMap;

use crate::counter::Report;

/// Label carried by the grand total report.
pub const TOTAL_LABEL: &str = "Total";

/// Summed counters for a group of files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregate {
    pub report: Report,
    pub files: usize,
}

impl Aggregate {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            report: Report::new(label),
            files: 0,
        }
    }

    pub const fn add(&mut self, report: &Report) {
        self.report.absorb(report);
        self.files = self.files.saturating_add(1);
    }

    pub const fn merge(&mut self, other: &Self) {
        self.report.absorb(&other.report);
        self.files = self.files.saturating_add(other.files);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    by_type: IndexMap<String, Aggregate>,
    total: Aggregate,
}

impl Summary {
    #[must_use]
    pub fn new() -> Self {
        Self {
            by_type: IndexMap::new(),
            total: Aggregate::new(TOTAL_LABEL),
        }
    }

    /// Fold one file's report into its type group and the grand total.
    pub fn add(&mut self, report: &Report) {
        self.by_type
            .entry(report.file_type.clone())
            .or_insert_with(|| Aggregate::new(report.file_type.as_str()))
            .add(report);
        self.total.add(report);
    }

    /// Combine two summaries. Groups only present in `other` are appended in its order.
    #[must_use]
    pub fn merge(mut self, other: &Self) -> Self {
        for (file_type, aggregate) in &other.by_type {
            self.by_type
                .entry(file_type.clone())
                .or_insert_with(|| Aggregate::new(file_type.as_str()))
                .merge(aggregate);
        }
        self.total.merge(&other.total);
        self
    }

    #[must_use]
    pub const fn by_type(&self) -> &IndexMap<String, Aggregate> {
        &self.by_type
    }

    #[must_use]
    pub fn get(&self, file_type: &str) -> Option<&Aggregate> {
        self.by_type.get(file_type)
    }

    #[must_use]
    pub const fn total(&self) -> &Aggregate {
        &self.total
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_type.is_empty()
    }
}

impl Default for Summary {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Extend<&'a Report> for Summary {
    fn extend<I: IntoIterator<Item = &'a Report>>(&mut self, reports: I) {
        for report in reports {
            self.add(report);
        }
    }
}

impl<'a> FromIterator<&'a Report> for Summary {
    fn from_iter<I: IntoIterator<Item = &'a Report>>(reports: I) -> Self {
        let mut summary = Self::new();
        summary.extend(reports);
        summary
    }
}

/// Aggregate a file-to-report mapping. An empty mapping yields an empty summary.
pub fn aggregate<'a, K, I>(per_file: I) -> Summary
where
    K: 'a,
    I: IntoIterator<Item = (&'a K, &'a Report)>,
{
    per_file.into_iter().map(|(_, report)| report).collect()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
