// Label counts for the sentiment and topic breakdowns.

use std::collections::HashMap;

use serde::Serialize;

use crate::sentiment::SentimentLabel;
use crate::topics::CategoryLabel;

/// How many reviews carry a label, and their share of the total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
    /// Fraction of all counted reviews (0.0 to 1.0)
    pub share: f64,
}

/// Sentiment counts in Positive, Negative, Neutral order; absent labels are
/// left out.
pub fn sentiment_distribution(labels: &[SentimentLabel]) -> Vec<LabelCount> {
    let counts = count(labels);
    SentimentLabel::ALL
        .iter()
        .filter_map(|label| {
            let n = counts.get(label).copied().unwrap_or(0);
            (n > 0).then(|| LabelCount {
                label: label.to_string(),
                count: n,
                share: n as f64 / labels.len() as f64,
            })
        })
        .collect()
}

/// Topic category counts, most common first. Equal counts follow category
/// priority order.
pub fn topic_distribution(labels: &[CategoryLabel]) -> Vec<LabelCount> {
    let counts = count(labels);
    let mut present: Vec<(CategoryLabel, usize)> = CategoryLabel::ALL
        .iter()
        .filter_map(|label| counts.get(label).map(|&n| (*label, n)))
        .collect();
    present.sort_by(|a, b| b.1.cmp(&a.1));
    present
        .into_iter()
        .map(|(label, n)| LabelCount {
            label: label.to_string(),
            count: n,
            share: n as f64 / labels.len() as f64,
        })
        .collect()
}

fn count<T: Copy + Eq + std::hash::Hash>(labels: &[T]) -> HashMap<T, usize> {
    let mut counts = HashMap::new();
    for label in labels {
        *counts.entry(*label).or_insert(0) += 1;
    }
    counts
}
