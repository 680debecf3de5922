/// Classification of a single source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Comment,
    Code,
}

/// Line tally for one file, or for a group of files once merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub file_type: String,
    pub code: usize,
    pub comments: usize,
    pub blanks: usize,
}

impl Report {
    #[must_use]
    pub fn new(file_type: impl Into<String>) -> Self {
        Self {
            file_type: file_type.into(),
            code: 0,
            comments: 0,
            blanks: 0,
        }
    }

    pub const fn increment_code(&mut self) {
        self.code = self.code.saturating_add(1);
    }

    pub const fn increment_comments(&mut self) {
        self.comments = self.comments.saturating_add(1);
    }

    pub const fn increment_blanks(&mut self) {
        self.blanks = self.blanks.saturating_add(1);
    }

    pub const fn record(&mut self, kind: LineKind) {
        match kind {
            LineKind::Blank => self.increment_blanks(),
            LineKind::Comment => self.increment_comments(),
            LineKind::Code => self.increment_code(),
        }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.code
            .saturating_add(self.comments)
            .saturating_add(self.blanks)
    }

    /// Add another report's counters into this one. The label is left untouched.
    pub const fn absorb(&mut self, other: &Self) {
        self.code = self.code.saturating_add(other.code);
        self.comments = self.comments.saturating_add(other.comments);
        self.blanks = self.blanks.saturating_add(other.blanks);
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
