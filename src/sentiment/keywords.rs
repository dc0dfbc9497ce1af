// Keyword-lookup sentiment classifier.
//
// The keyword lists and their priority live in an ordered rule table rather
// than nested conditionals: the first rule with a matching keyword wins, and
// text matching no rule is Neutral. Matching is a case-insensitive substring
// test, so "goodness" counts as "good" and "longer" counts as "long".

use super::traits::{SentimentClassifier, SentimentLabel};

pub const POSITIVE_KEYWORDS: &[&str] = &[
    "good",
    "excellent",
    "great",
    "happy",
    "love",
    "satisfied",
    "fantastic",
    "awesome",
    "amazing",
];

pub const NEGATIVE_KEYWORDS: &[&str] = &[
    "bad",
    "worst",
    "poor",
    "broken",
    "long",
    "scratched",
    "disappointed",
    "terrible",
    "horrible",
];

/// One entry in the classifier's priority list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentimentRule {
    pub label: SentimentLabel,
    /// Lowercase keywords; any one of them appearing in the text triggers the rule
    pub keywords: Vec<String>,
}

impl SentimentRule {
    pub fn new(label: SentimentLabel, keywords: &[&str]) -> Self {
        Self {
            label,
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    /// True if any keyword occurs in `lowered` (already lowercased text).
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k.as_str()))
    }
}

/// Classifier driven by an ordered list of keyword rules.
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    rules: Vec<SentimentRule>,
}

impl KeywordClassifier {
    /// Build a classifier from custom rules, evaluated in the given order.
    pub fn with_rules(rules: Vec<SentimentRule>) -> Self {
        Self { rules }
    }

    /// The rules in priority order.
    pub fn rules(&self) -> &[SentimentRule] {
        &self.rules
    }
}

impl Default for KeywordClassifier {
    /// Positive keywords are checked before negative ones, so mixed
    /// reviews come out Positive.
    fn default() -> Self {
        Self::with_rules(vec![
            SentimentRule::new(SentimentLabel::Positive, POSITIVE_KEYWORDS),
            SentimentRule::new(SentimentLabel::Negative, NEGATIVE_KEYWORDS),
        ])
    }
}

impl SentimentClassifier for KeywordClassifier {
    fn classify(&self, text: &str) -> SentimentLabel {
        let lowered = text.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map(|rule| rule.label)
            .unwrap_or(SentimentLabel::Neutral)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rule_order() {
        let classifier = KeywordClassifier::default();
        let labels: Vec<SentimentLabel> = classifier.rules().iter().map(|r| r.label).collect();
        assert_eq!(labels, vec![SentimentLabel::Positive, SentimentLabel::Negative]);
    }

    #[test]
    fn test_substring_match() {
        let classifier = KeywordClassifier::default();
        // "long" is a negative keyword even inside another word
        assert_eq!(classifier.classify("It took longer than expected"), SentimentLabel::Negative);
        assert_eq!(classifier.classify("GOODNESS me"), SentimentLabel::Positive);
    }

    #[test]
    fn test_empty_is_neutral() {
        let classifier = KeywordClassifier::default();
        assert_eq!(classifier.classify(""), SentimentLabel::Neutral);
    }

    #[test]
    fn test_custom_rules_respect_order() {
        let classifier = KeywordClassifier::with_rules(vec![
            SentimentRule::new(SentimentLabel::Negative, &["refund"]),
            SentimentRule::new(SentimentLabel::Positive, &["Thanks"]),
        ]);
        assert_eq!(classifier.classify("thanks for the refund"), SentimentLabel::Negative);
        assert_eq!(classifier.classify("THANKS"), SentimentLabel::Positive);
    }

    #[test]
    fn test_batch_preserves_order() {
        let classifier = KeywordClassifier::default();
        let texts = vec![
            "terrible".to_string(),
            "fine".to_string(),
            "amazing".to_string(),
        ];
        assert_eq!(
            classifier.classify_batch(&texts),
            vec![SentimentLabel::Negative, SentimentLabel::Neutral, SentimentLabel::Positive]
        );
    }
}
