// Colored terminal output for single results and bulk reports.
//
// Stands in for the dashboard's charts: every chart becomes a small table
// or bar list with the same numbers behind it.

use colored::Colorize;

use crate::insights::{KeywordScore, LabelCount, TrendPoint};
use crate::pipeline::BulkReport;
use crate::reviews::AnnotatedTable;
use crate::sentiment::{KeywordClassifier, SentimentLabel};
use crate::topics::TopicLabeler;

/// Display the result of a single-review analysis.
pub fn display_single(label: SentimentLabel) {
    println!("{} {}", "Predicted Sentiment:".bold(), colorize_sentiment(label.as_str()));
}

/// Display a whole bulk report.
pub fn display_report(report: &BulkReport, preview_rows: usize) {
    display_preview(&report.upload, preview_rows);

    if !report.source_filter.is_empty() {
        println!(
            "  Source filter: {} ({} of {} reviews)",
            report.source_filter.join(", "),
            report.analyzed_reviews,
            report.total_reviews
        );
    } else if !report.sources.is_empty() {
        println!("  Sources: {}", report.sources.join(", ").dimmed());
    }

    println!("\n{}", "=== Sentiment Distribution ===".bold());
    display_counts(&report.sentiment_distribution, true);

    if let Some(trend) = &report.trend {
        display_trend(trend);
    }

    println!("\n{}", "=== Keyword Insights ===".bold());
    display_keywords("Positive keywords", &report.positive_keywords);
    display_keywords("Negative keywords", &report.negative_keywords);

    if let Some(topics) = &report.topics {
        println!("\n{}", "=== Detected Topics ===".bold());
        for description in &topics.descriptions {
            println!("  - {description}");
        }
        println!("\n{}", "=== Topic Distribution by Category ===".bold());
        display_counts(&topics.distribution, false);
    }

    for warning in &report.warnings {
        println!("\n{} {}", "Warning:".yellow(), warning);
    }

    println!("\n{}", "Analysis complete.".green().bold());
}

/// Display the keyword rule tables in the order they are evaluated.
pub fn display_rules(classifier: &KeywordClassifier, labeler: &TopicLabeler) {
    println!("{}", "=== Sentiment rules (first match wins) ===".bold());
    for (i, rule) in classifier.rules().iter().enumerate() {
        println!(
            "  {}. {:<10} {}",
            i + 1,
            colorize_sentiment(rule.label.as_str()),
            rule.keywords.join(", ").dimmed()
        );
    }
    println!("     {:<10} (no match)", colorize_sentiment("Neutral"));

    println!("\n{}", "=== Topic categories (first overlap wins) ===".bold());
    for (i, rule) in labeler.rules().iter().enumerate() {
        let mut words: Vec<&str> = rule.keywords.iter().map(|k| k.as_str()).collect();
        words.sort_unstable();
        println!("  {}. {:<18} {}", i + 1, rule.label.as_str(), words.join(", ").dimmed());
    }
    println!("     {:<18} (no overlap)", labeler.fallback().as_str());
}

fn display_preview(table: &AnnotatedTable, rows: usize) {
    println!(
        "\n{}",
        format!("=== Data Preview ({} of {} rows) ===", rows.min(table.len()), table.len()).bold()
    );
    println!("  {}", table.headers().join(" | ").dimmed());
    for row in table.head(rows) {
        let cells: Vec<String> = row.iter().map(|c| super::truncate_chars(c, 60)).collect();
        println!("  {}", cells.join(" | "));
    }
}

fn display_counts(counts: &[LabelCount], sentiment_colors: bool) {
    if counts.is_empty() {
        println!("  (no reviews)");
        return;
    }
    let bar_width: usize = 20;
    for entry in counts {
        let filled = (entry.share * bar_width as f64).round() as usize;
        let bar = format!(
            "[{}{}]",
            "=".repeat(filled),
            " ".repeat(bar_width.saturating_sub(filled))
        );
        let label = if sentiment_colors {
            colorize_sentiment(&entry.label)
        } else {
            entry.label.bold()
        };
        println!(
            "  {:<18} {} {:>5}  ({:.0}%)",
            label,
            bar,
            entry.count,
            entry.share * 100.0
        );
    }
}

fn display_trend(trend: &[TrendPoint]) {
    println!("\n{}", "=== Sentiment Trend Over Time ===".bold());
    for point in trend {
        println!(
            "  {}  {:<10} {:>5}",
            point.date,
            colorize_sentiment(point.sentiment.as_str()),
            point.count
        );
    }
}

fn display_keywords(title: &str, keywords: &[KeywordScore]) {
    if keywords.is_empty() {
        return;
    }
    let words: Vec<&str> = keywords.iter().map(|k| k.word.as_str()).collect();
    println!("  {}: {}", title, words.join(", "));
}

/// Colorize a sentiment label string.
fn colorize_sentiment(label: &str) -> colored::ColoredString {
    match label {
        "Positive" => label.green(),
        "Negative" => label.red(),
        "Neutral" => label.dimmed(),
        _ => label.normal(),
    }
}
