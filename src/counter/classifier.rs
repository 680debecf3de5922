use crate::language::{LanguageRule, MarkerPolicy};

use super::{CommentDetector, LineKind, Report};

/// Walks a file's lines in order and tallies code, comment and blank lines.
///
/// The only state carried between lines is the end marker of the currently open
/// multi-line comment, and it lives on the stack of a single run. One classifier
/// can therefore be shared across threads.
pub struct LineClassifier<'a> {
    rule: &'a LanguageRule,
    detector: CommentDetector<'a>,
}

impl<'a> LineClassifier<'a> {
    #[must_use]
    pub fn new(rule: &'a LanguageRule) -> Self {
        Self::with_policy(rule, MarkerPolicy::default())
    }

    #[must_use]
    pub fn with_policy(rule: &'a LanguageRule, policy: MarkerPolicy) -> Self {
        Self {
            rule,
            detector: CommentDetector::new(rule, policy),
        }
    }

    #[must_use]
    pub fn classify<I, S>(&self, lines: I) -> Report
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = Report::new(self.rule.name.as_str());
        let mut open_end: Option<&'a str> = None;

        for line in lines {
            report.record(self.classify_line(line.as_ref(), &mut open_end));
        }

        report
    }

    #[must_use]
    pub fn classify_source(&self, source: &str) -> Report {
        self.classify(source.lines())
    }

    /// Order matters: blank, then line comment, then multi-line region, then code.
    fn classify_line(&self, line: &str, open_end: &mut Option<&'a str>) -> LineKind {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            return LineKind::Blank;
        }

        if self.detector.is_line_comment(trimmed) {
            return LineKind::Comment;
        }

        if self.detector.supports_multi_line() {
            // A line inside an open region only looks for that region's closer.
            let end = (*open_end).or_else(|| self.detector.multi_line_end_for(trimmed));
            if let Some(end) = end {
                *open_end = if trimmed.ends_with(end) {
                    None
                } else {
                    Some(end)
                };
                return LineKind::Comment;
            }
        }

        LineKind::Code
    }
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod tests;
