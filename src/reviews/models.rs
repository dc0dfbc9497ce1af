// Review collection: an uploaded table with known text/source/date columns.
//
// The collection keeps every original cell so derived columns can be
// appended later without losing or reordering anything.

use serde::Serialize;

/// A single review, borrowed out of its collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Review {
    /// Position in the collection (input order)
    pub row: usize,
    pub text: String,
    pub source: Option<String>,
    /// Raw date cell; parsing happens where trends are computed
    pub date: Option<String>,
}

/// Ordered reviews plus the table they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewCollection {
    headers: Vec<String>,
    /// Every row padded to `headers.len()` cells
    rows: Vec<Vec<String>>,
    text_col: usize,
    source_col: Option<usize>,
    date_col: Option<usize>,
}

impl ReviewCollection {
    /// Assemble a collection from an already-parsed table.
    ///
    /// Rows shorter than the header are padded with empty cells; longer rows
    /// keep their extra cells out of the table.
    pub(crate) fn from_table(
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
        text_col: usize,
        source_col: Option<usize>,
        date_col: Option<usize>,
    ) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Self {
            headers,
            rows,
            text_col,
            source_col,
            date_col,
        }
    }

    /// Build a collection of bare texts (no source or date columns).
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rows = texts.into_iter().map(|t| vec![t.into()]).collect();
        Self::from_table(
            vec![super::loader::TEXT_COLUMN.to_string()],
            rows,
            0,
            None,
            None,
        )
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Original cells, one `Vec` per row, in input order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn has_source(&self) -> bool {
        self.source_col.is_some()
    }

    pub fn has_date(&self) -> bool {
        self.date_col.is_some()
    }

    pub fn review(&self, row: usize) -> Option<Review> {
        let cells = self.rows.get(row)?;
        Some(Review {
            row,
            text: cells[self.text_col].clone(),
            source: self.source_col.and_then(|c| non_empty(&cells[c])),
            date: self.date_col.and_then(|c| non_empty(&cells[c])),
        })
    }

    pub fn reviews(&self) -> impl Iterator<Item = Review> + '_ {
        (0..self.rows.len()).filter_map(move |row| self.review(row))
    }

    /// Review texts in input order.
    pub fn texts(&self) -> Vec<String> {
        self.rows.iter().map(|r| r[self.text_col].clone()).collect()
    }

    /// Distinct non-empty sources in first-seen order.
    pub fn sources(&self) -> Vec<String> {
        let Some(col) = self.source_col else {
            return Vec::new();
        };
        let mut seen: Vec<String> = Vec::new();
        for row in &self.rows {
            if let Some(source) = non_empty(&row[col]) {
                if !seen.contains(&source) {
                    seen.push(source);
                }
            }
        }
        seen
    }

    /// Keep only rows whose source is in `sources`.
    ///
    /// Cells and filter values are compared after trimming, the same way
    /// `review()` reports a source.
    ///
    /// Without a `Source` column, or with an empty filter, the collection is
    /// returned unchanged. Row order is preserved.
    pub fn filter_sources(&self, sources: &[String]) -> Self {
        let Some(col) = self.source_col else {
            return self.clone();
        };
        if sources.is_empty() {
            return self.clone();
        }
        let wanted: Vec<&str> = sources.iter().map(|s| s.trim()).collect();
        let rows = self
            .rows
            .iter()
            .filter(|row| wanted.contains(&row[col].trim()))
            .cloned()
            .collect();
        Self {
            rows,
            ..self.clone_shape()
        }
    }

    fn clone_shape(&self) -> Self {
        Self {
            headers: self.headers.clone(),
            rows: Vec::new(),
            text_col: self.text_col,
            source_col: self.source_col,
            date_col: self.date_col,
        }
    }
}

fn non_empty(cell: &str) -> Option<String> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
