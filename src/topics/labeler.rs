// Topic labeler: maps a topic's top words onto a fixed category.
//
// Categories are checked in priority order and the first one sharing at
// least one exact word with the topic wins. A topic sharing nothing with any
// category is General Feedback.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Human-readable name attached to a fitted topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CategoryLabel {
    Delivery,
    #[serde(rename = "Product Quality")]
    ProductQuality,
    #[serde(rename = "Customer Support")]
    CustomerSupport,
    #[serde(rename = "General Feedback")]
    GeneralFeedback,
}

impl CategoryLabel {
    /// All labels in priority order, with the fallback last.
    pub const ALL: [CategoryLabel; 4] = [
        CategoryLabel::Delivery,
        CategoryLabel::ProductQuality,
        CategoryLabel::CustomerSupport,
        CategoryLabel::GeneralFeedback,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryLabel::Delivery => "Delivery",
            CategoryLabel::ProductQuality => "Product Quality",
            CategoryLabel::CustomerSupport => "Customer Support",
            CategoryLabel::GeneralFeedback => "General Feedback",
        }
    }
}

impl std::fmt::Display for CategoryLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub const DELIVERY_KEYWORDS: &[&str] = &["delivery", "shipping", "late", "fast", "arrived"];
pub const QUALITY_KEYWORDS: &[&str] = &["quality", "design", "durability", "scratched", "packaging"];
pub const SUPPORT_KEYWORDS: &[&str] = &["support", "service", "helpful", "rude", "customer"];

/// A category and the words that identify it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRule {
    pub label: CategoryLabel,
    pub keywords: HashSet<String>,
}

impl CategoryRule {
    pub fn new(label: CategoryLabel, keywords: &[&str]) -> Self {
        Self {
            label,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Ordered category rules with a fallback label.
#[derive(Debug, Clone)]
pub struct TopicLabeler {
    rules: Vec<CategoryRule>,
    fallback: CategoryLabel,
}

impl Default for TopicLabeler {
    fn default() -> Self {
        Self {
            rules: vec![
                CategoryRule::new(CategoryLabel::Delivery, DELIVERY_KEYWORDS),
                CategoryRule::new(CategoryLabel::ProductQuality, QUALITY_KEYWORDS),
                CategoryRule::new(CategoryLabel::CustomerSupport, SUPPORT_KEYWORDS),
            ],
            fallback: CategoryLabel::GeneralFeedback,
        }
    }
}

impl TopicLabeler {
    /// The rules in priority order.
    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    pub fn fallback(&self) -> CategoryLabel {
        self.fallback
    }

    /// Label a topic from its top words. Word order does not matter.
    pub fn label<S: AsRef<str>>(&self, top_words: &[S]) -> CategoryLabel {
        let words: HashSet<&str> = top_words.iter().map(|w| w.as_ref()).collect();
        self.rules
            .iter()
            .find(|rule| rule.keywords.iter().any(|k| words.contains(k.as_str())))
            .map(|rule| rule.label)
            .unwrap_or(self.fallback)
    }
}

/// Label top words with the default category table.
pub fn label_topic<S: AsRef<str>>(top_words: &[S]) -> CategoryLabel {
    TopicLabeler::default().label(top_words)
}
