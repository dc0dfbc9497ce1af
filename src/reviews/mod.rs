// Review data: the uploaded table, CSV loading and derived columns.

pub mod annotate;
pub mod loader;
pub mod models;

pub use annotate::{AnnotatedTable, SENTIMENT_COLUMN, TOPIC_COLUMN};
pub use loader::{ReviewLoadError, DATE_COLUMN, SOURCE_COLUMN, TEXT_COLUMN};
pub use models::{Review, ReviewCollection};
