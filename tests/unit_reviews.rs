// Unit tests for CSV loading, source filtering, annotation and trends.

use chrono::NaiveDate;
use reputation::insights::{sentiment_trend, TrendUnavailable};
use reputation::reviews::{AnnotatedTable, ReviewCollection, ReviewLoadError, SENTIMENT_COLUMN};
use reputation::sentiment::{KeywordClassifier, SentimentClassifier, SentimentLabel};

const UPLOAD: &str = "\
Id,ReviewText,Source,Date
1,Great phone and fast delivery,Amazon,2024-01-05
2,Screen arrived scratched,Website,2024-01-05
3,It is a phone,Amazon,not a date
4,Love the design,Store,2024-01-06
";

fn upload() -> ReviewCollection {
    ReviewCollection::from_reader(UPLOAD.as_bytes()).unwrap()
}

// ============================================================
// Loading
// ============================================================

#[test]
fn loads_rows_in_input_order() {
    let c = upload();
    assert_eq!(c.len(), 4);
    assert_eq!(c.headers(), &["Id", "ReviewText", "Source", "Date"]);
    let ids: Vec<&str> = c.rows().iter().map(|r| r[0].as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4"]);
    assert_eq!(c.review(1).unwrap().text, "Screen arrived scratched");
}

#[test]
fn missing_review_text_column_fails_fast() {
    let data = "Text,Source\nGreat,Amazon\n";
    match ReviewCollection::from_reader(data.as_bytes()) {
        Err(ReviewLoadError::MissingColumn(col)) => assert_eq!(col, "ReviewText"),
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn header_whitespace_is_ignored() {
    let data = " ReviewText , Source \nGreat,Amazon\n";
    let c = ReviewCollection::from_reader(data.as_bytes()).unwrap();
    assert!(c.has_source());
    assert_eq!(c.review(0).unwrap().source.as_deref(), Some("Amazon"));
}

#[test]
fn ragged_rows_are_padded() {
    let data = "ReviewText,Source,Date\nGreat\nBad,Store\n";
    let c = ReviewCollection::from_reader(data.as_bytes()).unwrap();
    assert_eq!(c.len(), 2);
    assert_eq!(c.review(0).unwrap().source, None);
    assert_eq!(c.review(1).unwrap().date, None);
}

// ============================================================
// Source filtering
// ============================================================

#[test]
fn sources_listed_in_first_seen_order() {
    assert_eq!(upload().sources(), vec!["Amazon", "Website", "Store"]);
}

#[test]
fn filtering_by_source_keeps_row_order() {
    let filtered = upload().filter_sources(&["Amazon".to_string(), "Store".to_string()]);
    let ids: Vec<&str> = filtered.rows().iter().map(|r| r[0].as_str()).collect();
    assert_eq!(ids, vec!["1", "3", "4"]);
}

// ============================================================
// Annotation round-trip
// ============================================================

#[test]
fn annotation_never_drops_or_reorders_rows() {
    let c = upload();
    let sentiments = KeywordClassifier::default().classify_batch(&c.texts());
    let table = AnnotatedTable::new(&c, &sentiments, None).unwrap();

    assert_eq!(table.len(), c.len());
    for (original, annotated) in c.rows().iter().zip(table.rows()) {
        assert_eq!(&annotated[..original.len()], original.as_slice());
    }
    assert_eq!(
        table.column(SENTIMENT_COLUMN),
        Some(vec!["Positive", "Negative", "Neutral", "Positive"])
    );
}

// ============================================================
// Trend over time
// ============================================================

#[test]
fn trend_drops_only_unparseable_rows() {
    let c = upload();
    let sentiments = KeywordClassifier::default().classify_batch(&c.texts());
    let trend = sentiment_trend(&c, &sentiments).unwrap();

    let jan5 = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
    let jan6 = NaiveDate::from_ymd_opt(2024, 1, 6).unwrap();
    let rows: Vec<(NaiveDate, SentimentLabel, usize)> =
        trend.iter().map(|p| (p.date, p.sentiment, p.count)).collect();
    assert_eq!(
        rows,
        vec![
            (jan5, SentimentLabel::Positive, 1),
            (jan5, SentimentLabel::Negative, 1),
            (jan6, SentimentLabel::Positive, 1),
        ]
    );
}

#[test]
fn trend_unavailable_when_no_date_parses() {
    let data = "ReviewText,Date\ngood,soon\nbad,later\n";
    let c = ReviewCollection::from_reader(data.as_bytes()).unwrap();
    let sentiments = KeywordClassifier::default().classify_batch(&c.texts());
    assert_eq!(
        sentiment_trend(&c, &sentiments),
        Err(TrendUnavailable::Unparseable { rows: 2 })
    );
}

#[test]
fn trend_needs_date_column() {
    let c = ReviewCollection::from_texts(["good"]);
    assert_eq!(
        sentiment_trend(&c, &[SentimentLabel::Positive]),
        Err(TrendUnavailable::NoDateColumn)
    );
}

#[test]
fn padded_source_cells_are_one_source() {
    let data = "ReviewText,Source\ngood, web\nbad,web\nok,store\n";
    let c = ReviewCollection::from_reader(data.as_bytes()).unwrap();
    assert_eq!(c.sources(), vec!["web", "store"]);
    assert_eq!(c.review(0).unwrap().source.as_deref(), Some("web"));
    assert_eq!(c.filter_sources(&["web".to_string()]).len(), 2);
}
