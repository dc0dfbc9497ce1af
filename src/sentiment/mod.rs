// Sentiment classification: keyword rules and the classifier seam.

pub mod keywords;
pub mod traits;

pub use keywords::{KeywordClassifier, SentimentRule};
pub use traits::{SentimentClassifier, SentimentLabel};
