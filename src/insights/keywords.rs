// TF-IDF keyword insights for a group of reviews.
//
// Uses the `keyword_extraction` crate with every review as its own document,
// so words repeated across many reviews in a group score lower than words
// that characterize a few of them. The ranked list is the data behind a
// word cloud. Sentiment and category keywords are kept out of the stop-word
// list so "great" or "broken" can show up.

use keyword_extraction::tf_idf::{TfIdf, TfIdfParams};
use serde::Serialize;
use tracing::debug;

use crate::topics::vectorizer::domain_stop_words;

/// A keyword and its TF-IDF score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordScore {
    pub word: String,
    pub score: f32,
}

/// Ranks the most distinctive words of a review group.
pub struct KeywordExtractor {
    /// How many keywords to return per group
    pub top_n: usize,
    stop_words: Vec<String>,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new(15)
    }
}

impl KeywordExtractor {
    pub fn new(top_n: usize) -> Self {
        Self {
            top_n,
            stop_words: domain_stop_words(),
        }
    }

    /// Top keywords for `reviews`, highest score first. An empty group has
    /// no keywords.
    pub fn extract(&self, reviews: &[String]) -> Vec<KeywordScore> {
        if reviews.is_empty() || self.top_n == 0 {
            return Vec::new();
        }

        let params = TfIdfParams::UnprocessedDocuments(reviews, &self.stop_words, None);
        let tfidf = TfIdf::new(params);
        let ranked: Vec<(String, f32)> = tfidf.get_ranked_word_scores(self.top_n);

        debug!(reviews = reviews.len(), keywords = ranked.len(), "Extracted keywords");

        ranked
            .into_iter()
            .map(|(word, score)| KeywordScore { word, score })
            .collect()
    }
}
