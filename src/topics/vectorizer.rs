// Bag-of-words count vectorizer.
//
// Turns review texts into a document-term count matrix. Tokens are runs of
// two or more Unicode word characters after lowercasing, English stop words are
// dropped, and terms are pruned by document frequency:
//
//   keep term  <=>  df >= min_df  &&  df <= max_df * n_docs
//
// `min_df` is an absolute document count and `max_df` a proportion of the
// collection. The vocabulary is sorted alphabetically, which fixes the
// feature order used to break ties downstream.

use std::collections::{BTreeMap, HashSet};

use regex::Regex;
use stop_words::{get, LANGUAGE};
use tracing::debug;

use super::error::TopicModelError;
use super::labeler::{DELIVERY_KEYWORDS, QUALITY_KEYWORDS, SUPPORT_KEYWORDS};
use crate::sentiment::keywords::{NEGATIVE_KEYWORDS, POSITIVE_KEYWORDS};

/// The English stop-word list minus every sentiment and category keyword.
///
/// The generic list drops words such as "good" or "long" that the
/// classifier and labeler match on, so those stay in the vocabulary.
pub fn domain_stop_words() -> Vec<String> {
    let keep: HashSet<&str> = [
        POSITIVE_KEYWORDS,
        NEGATIVE_KEYWORDS,
        DELIVERY_KEYWORDS,
        QUALITY_KEYWORDS,
        SUPPORT_KEYWORDS,
    ]
    .concat()
    .into_iter()
    .collect();
    let english: Vec<String> = get(LANGUAGE::English);
    english
        .into_iter()
        .filter(|w| !keep.contains(w.to_lowercase().as_str()))
        .collect()
}

/// Document-frequency pruning thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorizerSettings {
    /// Drop terms appearing in more than this share of documents (0.0, 1.0]
    pub max_df: f64,
    /// Drop terms appearing in fewer than this many documents
    pub min_df: usize,
}

impl Default for VectorizerSettings {
    fn default() -> Self {
        Self {
            max_df: 0.9,
            min_df: 2,
        }
    }
}

/// Sparse document-term count matrix with its vocabulary.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentTermMatrix {
    vocabulary: Vec<String>,
    /// Per document: (term index, count) pairs, sorted by term index
    rows: Vec<Vec<(usize, u32)>>,
}

impl DocumentTermMatrix {
    pub fn n_docs(&self) -> usize {
        self.rows.len()
    }

    pub fn n_terms(&self) -> usize {
        self.vocabulary.len()
    }

    /// Feature names in column order.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Non-zero (term index, count) entries of one document.
    pub fn row(&self, doc: usize) -> &[(usize, u32)] {
        &self.rows[doc]
    }

    pub fn count(&self, doc: usize, term: usize) -> u32 {
        self.rows[doc]
            .binary_search_by_key(&term, |&(t, _)| t)
            .map(|i| self.rows[doc][i].1)
            .unwrap_or(0)
    }

    /// Index of a vocabulary term, if it survived pruning.
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary
            .binary_search_by(|probe| probe.as_str().cmp(term))
            .ok()
    }
}

/// Count vectorizer with stop-word removal and document-frequency pruning.
pub struct CountVectorizer {
    settings: VectorizerSettings,
    token_re: Regex,
    stop_words: HashSet<String>,
}

impl CountVectorizer {
    /// Build a vectorizer that uses `domain_stop_words`.
    pub fn new(settings: VectorizerSettings) -> Result<Self, TopicModelError> {
        Self::with_stop_words(settings, domain_stop_words())
    }

    /// Build a vectorizer with a caller-supplied stop-word list.
    pub fn with_stop_words<I, S>(settings: VectorizerSettings, stop_words: I) -> Result<Self, TopicModelError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !(settings.max_df > 0.0 && settings.max_df <= 1.0) {
            return Err(TopicModelError::InvalidParameters(format!(
                "max_df must be in (0, 1], got {}",
                settings.max_df
            )));
        }
        if settings.min_df == 0 {
            return Err(TopicModelError::InvalidParameters(
                "min_df must be at least 1".to_string(),
            ));
        }

        let token_re = Regex::new(r"\b\w\w+\b")
            .map_err(|e| TopicModelError::InvalidParameters(format!("token pattern: {e}")))?;

        Ok(Self {
            settings,
            token_re,
            stop_words: stop_words
                .into_iter()
                .map(|w| {
                    let w: String = w.into();
                    w.to_lowercase()
                })
                .collect(),
        })
    }

    /// Lowercase, split into tokens and drop stop words.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.token_re
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|tok| !self.stop_words.contains(*tok))
            .map(|tok| tok.to_string())
            .collect()
    }

    /// Learn the pruned vocabulary and count every document against it.
    ///
    /// Fails with `InsufficientData` when no term survives pruning.
    pub fn fit_transform(&self, documents: &[String]) -> Result<DocumentTermMatrix, TopicModelError> {
        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| self.tokenize(d)).collect();

        // Document frequency per term, alphabetically ordered
        let mut doc_freq: BTreeMap<&str, usize> = BTreeMap::new();
        for tokens in &tokenized {
            let unique: HashSet<&str> = tokens.iter().map(|t| t.as_str()).collect();
            for term in unique {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let max_doc_count = self.settings.max_df * documents.len() as f64;
        let total_terms = doc_freq.len();
        let vocabulary: Vec<String> = doc_freq
            .into_iter()
            .filter(|&(_, df)| df >= self.settings.min_df && df as f64 <= max_doc_count)
            .map(|(term, _)| term.to_string())
            .collect();

        debug!(
            documents = documents.len(),
            candidate_terms = total_terms,
            kept_terms = vocabulary.len(),
            "Built vectorizer vocabulary"
        );

        if vocabulary.is_empty() {
            return Err(TopicModelError::InsufficientData(format!(
                "no terms remain after pruning {total_terms} candidate terms across {} documents \
                 (min_df = {}, max_df = {})",
                documents.len(),
                self.settings.min_df,
                self.settings.max_df
            )));
        }

        let rows = tokenized
            .iter()
            .map(|tokens| {
                let mut counts: BTreeMap<usize, u32> = BTreeMap::new();
                for tok in tokens {
                    if let Ok(idx) = vocabulary.binary_search_by(|probe| probe.as_str().cmp(tok)) {
                        *counts.entry(idx).or_insert(0) += 1;
                    }
                }
                counts.into_iter().collect()
            })
            .collect();

        Ok(DocumentTermMatrix { vocabulary, rows })
    }
}
