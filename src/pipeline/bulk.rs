// Bulk analysis of an uploaded review collection.
//
// Each section of the report degrades on its own: a failed trend or topic
// model becomes a warning and the rest of the report is still produced.
// Only a missing `ReviewText` column stops an upload, and that happens
// earlier, at load time.

use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{info, warn};

use crate::insights::{
    sentiment_distribution, sentiment_trend, topic_distribution, KeywordExtractor, KeywordScore,
    LabelCount, TrendPoint, TrendUnavailable,
};
use crate::reviews::{AnnotatedTable, ReviewCollection};
use crate::sentiment::{SentimentClassifier, SentimentLabel};
use crate::topics::{LabeledTopic, TopicModelError, TopicModelOutput, TopicModeler};

/// Knobs for a bulk run that are not part of the topic model itself.
#[derive(Debug, Clone)]
pub struct BulkOptions {
    /// Only analyze reviews from these sources; empty means all
    pub source_filter: Vec<String>,
    /// Keywords per sentiment group in the keyword insights
    pub keyword_count: usize,
    /// Show a spinner on stderr while the topic model fits
    pub show_progress: bool,
}

impl Default for BulkOptions {
    fn default() -> Self {
        Self {
            source_filter: Vec::new(),
            keyword_count: 15,
            show_progress: false,
        }
    }
}

/// Topics found in the upload and how reviews spread across them.
#[derive(Debug, Clone, Serialize)]
pub struct TopicSummary {
    /// `"Label: word1, word2, ..."` per topic
    pub descriptions: Vec<String>,
    pub topics: Vec<LabeledTopic>,
    pub distribution: Vec<LabelCount>,
}

/// Everything produced for one upload.
#[derive(Debug, Clone, Serialize)]
pub struct BulkReport {
    /// Rows in the upload before source filtering
    pub total_reviews: usize,
    /// Rows left after source filtering
    pub analyzed_reviews: usize,
    /// Distinct sources in the upload, first-seen order
    pub sources: Vec<String>,
    pub source_filter: Vec<String>,
    pub sentiment_distribution: Vec<LabelCount>,
    /// `None` when the upload has no Date column or no date parsed
    pub trend: Option<Vec<TrendPoint>>,
    pub positive_keywords: Vec<KeywordScore>,
    pub negative_keywords: Vec<KeywordScore>,
    /// `None` when topic modeling failed (see `warnings`)
    pub topics: Option<TopicSummary>,
    /// Analyzed rows with their derived columns
    pub table: AnnotatedTable,
    /// Every uploaded row with its sentiment, before source filtering
    #[serde(skip)]
    pub upload: AnnotatedTable,
    pub warnings: Vec<String>,
}

/// Analyze a whole upload.
pub fn run(
    collection: &ReviewCollection,
    classifier: &dyn SentimentClassifier,
    modeler: &dyn TopicModeler,
    options: &BulkOptions,
) -> Result<BulkReport> {
    let mut warnings = Vec::new();

    let analyzed = collection.filter_sources(&options.source_filter);
    if analyzed.is_empty() && !collection.is_empty() {
        warnings.push(format!(
            "Source filter {:?} matched none of the {} reviews",
            options.source_filter,
            collection.len()
        ));
    }

    let upload_sentiments = classifier.classify_batch(&collection.texts());
    let upload = AnnotatedTable::new(collection, &upload_sentiments, None)?;

    let texts = analyzed.texts();
    let sentiments = if options.source_filter.is_empty() {
        upload_sentiments
    } else {
        classifier.classify_batch(&texts)
    };
    info!(
        total = collection.len(),
        analyzed = analyzed.len(),
        "Classified review sentiment"
    );

    let trend = match sentiment_trend(&analyzed, &sentiments) {
        Ok(points) => Some(points),
        Err(TrendUnavailable::NoDateColumn) => None,
        Err(e) => {
            warn!(error = %e, "Skipping sentiment trend");
            warnings.push(e.to_string());
            None
        }
    };

    let extractor = KeywordExtractor::new(options.keyword_count);
    let positive_keywords = extractor.extract(&texts_with(&texts, &sentiments, SentimentLabel::Positive));
    let negative_keywords = extractor.extract(&texts_with(&texts, &sentiments, SentimentLabel::Negative));

    let topic_result = fit_topics(modeler, &texts, options.show_progress);
    let topic_output = match topic_result {
        Ok(output) => Some(output),
        Err(e) => {
            if e.is_insufficient_data() {
                warn!(error = %e, "Not enough data for topic modeling");
            } else {
                warn!(error = %e, "Topic modeling failed");
            }
            warnings.push(format!("Topic modeling could not run: {e}"));
            None
        }
    };

    let table = AnnotatedTable::new(
        &analyzed,
        &sentiments,
        topic_output.as_ref().map(|o| o.assignments.as_slice()),
    )?;

    let topics = topic_output.map(|output| TopicSummary {
        descriptions: output.descriptions(),
        distribution: topic_distribution(&output.assignments),
        topics: output.topics,
    });

    Ok(BulkReport {
        total_reviews: collection.len(),
        analyzed_reviews: analyzed.len(),
        sources: collection.sources(),
        source_filter: options.source_filter.clone(),
        sentiment_distribution: sentiment_distribution(&sentiments),
        trend,
        positive_keywords,
        negative_keywords,
        topics,
        table,
        upload,
        warnings,
    })
}

fn fit_topics(
    modeler: &dyn TopicModeler,
    texts: &[String],
    show_progress: bool,
) -> Result<TopicModelOutput, TopicModelError> {
    if !show_progress {
        return modeler.model(texts);
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("  {spinner} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(format!("Fitting topic model over {} reviews...", texts.len()));
    pb.enable_steady_tick(Duration::from_millis(100));
    let result = modeler.model(texts);
    pb.finish_and_clear();
    result
}

fn texts_with(texts: &[String], sentiments: &[SentimentLabel], wanted: SentimentLabel) -> Vec<String> {
    texts
        .iter()
        .zip(sentiments)
        .filter(|(_, s)| **s == wanted)
        .map(|(t, _)| t.clone())
        .collect()
}
