// Single-review analysis.

use crate::sentiment::{SentimentClassifier, SentimentLabel};

/// Classify one review. Blank input is rejected with `None` so the caller
/// can warn instead of reporting a meaningless Neutral.
pub fn analyze(classifier: &dyn SentimentClassifier, text: &str) -> Option<SentimentLabel> {
    if text.trim().is_empty() {
        return None;
    }
    Some(classifier.classify(text))
}
