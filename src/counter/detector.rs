use crate::language::{LanguageRule, MarkerPolicy};

/// Matches trimmed lines against a rule's comment markers.
///
/// Markers only count at the start of the trimmed line; the detector has no
/// notion of string literals or tokens.
pub struct CommentDetector<'a> {
    line_markers: &'a [String],
    multi_line: &'a [(String, String)],
}

impl<'a> CommentDetector<'a> {
    #[must_use]
    pub fn new(rule: &'a LanguageRule, policy: MarkerPolicy) -> Self {
        Self {
            line_markers: policy.line_markers(rule),
            multi_line: policy.multi_line_pairs(rule),
        }
    }

    #[must_use]
    pub fn is_line_comment(&self, trimmed: &str) -> bool {
        self.line_markers
            .iter()
            .any(|marker| trimmed.starts_with(marker.as_str()))
    }

    /// End marker of the first multi-line pair whose start opens `trimmed`.
    #[must_use]
    pub fn multi_line_end_for(&self, trimmed: &str) -> Option<&'a str> {
        self.multi_line
            .iter()
            .find(|(start, _)| trimmed.starts_with(start.as_str()))
            .map(|(_, end)| end.as_str())
    }

    #[must_use]
    pub const fn supports_multi_line(&self) -> bool {
        !self.multi_line.is_empty()
    }
}

#[cfg(test)]
#[path = "detector_tests.rs"]
mod tests;
