// Sentiment classifier trait and the closed label set it produces.
//
// Like the topic modeler trait, this keeps the keyword approach swappable
// without touching the bulk pipeline.

use serde::{Deserialize, Serialize};

/// The sentiment assigned to a single review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// All labels in display order.
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Trait for mapping free text to a sentiment label.
pub trait SentimentClassifier {
    /// Classify a single text. Never fails; unknown text is Neutral.
    fn classify(&self, text: &str) -> SentimentLabel;

    /// Classify multiple texts, returning labels in the same order.
    fn classify_batch(&self, texts: &[String]) -> Vec<SentimentLabel> {
        texts.iter().map(|t| self.classify(t)).collect()
    }
}
