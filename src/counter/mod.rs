mod classifier;
mod detector;
mod report;

pub use classifier::LineClassifier;
pub use detector::CommentDetector;
pub use report::{LineKind, Report};

#[cfg(test)]
mod test_fixtures;
