// Sentiment trend over time.
//
// Date cells are parsed leniently. Rows whose date does not parse are left
// out of the trend but stay in every other section of the analysis.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::reviews::ReviewCollection;
use crate::sentiment::SentimentLabel;

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y", "%b %d, %Y", "%d %b %Y"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%m/%d/%Y %H:%M"];

/// Number of reviews with a given sentiment on a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub sentiment: SentimentLabel,
    pub count: usize,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrendUnavailable {
    #[error("no Date column in upload")]
    NoDateColumn,

    #[error("Could not parse dates for trend analysis ({rows} rows, none parseable)")]
    Unparseable { rows: usize },
}

/// Parse a date cell, accepting RFC 3339 and a handful of common layouts.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|dt| dt.date())
        })
}

/// Count sentiments per day, ordered by date then label.
///
/// `sentiments` must be aligned with the collection's rows.
pub fn sentiment_trend(
    collection: &ReviewCollection,
    sentiments: &[SentimentLabel],
) -> Result<Vec<TrendPoint>, TrendUnavailable> {
    if !collection.has_date() {
        return Err(TrendUnavailable::NoDateColumn);
    }

    let mut buckets: BTreeMap<(NaiveDate, SentimentLabel), usize> = BTreeMap::new();
    let mut dropped = 0usize;
    for (review, sentiment) in collection.reviews().zip(sentiments) {
        match review.date.as_deref().and_then(parse_date) {
            Some(date) => *buckets.entry((date, *sentiment)).or_insert(0) += 1,
            None => dropped += 1,
        }
    }

    if buckets.is_empty() && !collection.is_empty() {
        return Err(TrendUnavailable::Unparseable {
            rows: collection.len(),
        });
    }
    if dropped > 0 {
        debug!(dropped, "Skipped rows with unparseable dates");
    }

    Ok(buckets
        .into_iter()
        .map(|((date, sentiment), count)| TrendPoint {
            date,
            sentiment,
            count,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_common_formats() {
        assert_eq!(parse_date("2024-03-05"), Some(ymd(2024, 3, 5)));
        assert_eq!(parse_date(" 2024/03/05 "), Some(ymd(2024, 3, 5)));
        assert_eq!(parse_date("03/05/2024"), Some(ymd(2024, 3, 5)));
        assert_eq!(parse_date("2024-03-05 14:30:00"), Some(ymd(2024, 3, 5)));
        assert_eq!(parse_date("2024-03-05T23:30:00+00:00"), Some(ymd(2024, 3, 5)));
        assert_eq!(parse_date("Mar 05, 2024"), Some(ymd(2024, 3, 5)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_date("yesterday"), None);
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("2024-13-40"), None);
    }
}
