// Derived columns appended to the uploaded table.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use super::models::ReviewCollection;
use crate::sentiment::SentimentLabel;
use crate::topics::CategoryLabel;

pub const SENTIMENT_COLUMN: &str = "Predicted Sentiment";
pub const TOPIC_COLUMN: &str = "Topic";

/// The original table with `Predicted Sentiment` and, when topic modeling
/// succeeded, `Topic` columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl AnnotatedTable {
    /// Annotate every row of `collection` in order.
    ///
    /// A derived column whose name already exists in the upload replaces that
    /// column in place; otherwise it is appended on the right.
    pub fn new(
        collection: &ReviewCollection,
        sentiments: &[SentimentLabel],
        topics: Option<&[CategoryLabel]>,
    ) -> Result<Self> {
        if sentiments.len() != collection.len() {
            anyhow::bail!(
                "{} sentiment labels for {} reviews",
                sentiments.len(),
                collection.len()
            );
        }
        if let Some(topics) = topics {
            if topics.len() != collection.len() {
                anyhow::bail!(
                    "{} topic assignments for {} reviews",
                    topics.len(),
                    collection.len()
                );
            }
        }

        let mut table = Self {
            headers: collection.headers().to_vec(),
            rows: collection.rows().to_vec(),
        };
        table.set_column(SENTIMENT_COLUMN, sentiments.iter().map(|s| s.as_str()));
        if let Some(topics) = topics {
            table.set_column(TOPIC_COLUMN, topics.iter().map(|t| t.as_str()));
        }
        Ok(table)
    }

    fn set_column<'a>(&mut self, name: &str, values: impl Iterator<Item = &'a str>) {
        let col = match self.headers.iter().position(|h| h == name) {
            Some(col) => col,
            None => {
                self.headers.push(name.to_string());
                for row in &mut self.rows {
                    row.push(String::new());
                }
                self.headers.len() - 1
            }
        };
        for (row, value) in self.rows.iter_mut().zip(values) {
            row[col] = value.to_string();
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Values of one column in row order.
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let col = self.headers.iter().position(|h| h == name)?;
        Some(self.rows.iter().map(|r| r[col].as_str()).collect())
    }

    /// The first `n` rows.
    pub fn head(&self, n: usize) -> &[Vec<String>] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// Write the table as CSV with a header row.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut out = csv::Writer::from_writer(writer);
        out.write_record(&self.headers)?;
        for row in &self.rows {
            out.write_record(row)?;
        }
        out.flush()?;
        Ok(())
    }
}
