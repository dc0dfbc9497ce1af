// CSV loading for bulk review uploads.
//
// The upload must have a `ReviewText` column. `Source` and `Date` are picked
// up when present; every other column is carried through untouched.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use super::models::ReviewCollection;

pub const TEXT_COLUMN: &str = "ReviewText";
pub const SOURCE_COLUMN: &str = "Source";
pub const DATE_COLUMN: &str = "Date";

/// Why an upload could not be loaded. All of these abort the upload.
#[derive(Error, Debug)]
pub enum ReviewLoadError {
    #[error("CSV must have a column named '{0}'")]
    MissingColumn(String),

    #[error("failed to open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
}

impl ReviewCollection {
    /// Load a collection from a CSV file on disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ReviewLoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ReviewLoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let collection = Self::from_reader(file)?;
        info!(
            path = %path.display(),
            rows = collection.len(),
            "Loaded review upload"
        );
        Ok(collection)
    }

    /// Load a collection from any CSV byte stream with a header row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ReviewLoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader.headers()?.iter().map(|h| h.to_string()).collect();
        let find = |name: &str| headers.iter().position(|h| h == name);

        let text_col = find(TEXT_COLUMN)
            .ok_or_else(|| ReviewLoadError::MissingColumn(TEXT_COLUMN.to_string()))?;
        let source_col = find(SOURCE_COLUMN);
        let date_col = find(DATE_COLUMN);

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            rows.push(record.iter().map(|cell| cell.to_string()).collect());
        }

        Ok(Self::from_table(headers, rows, text_col, source_col, date_col))
    }
}
