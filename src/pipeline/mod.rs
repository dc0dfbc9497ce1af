// Analysis passes: one review typed in, or a whole upload.

pub mod bulk;
pub mod single;

pub use bulk::{BulkOptions, BulkReport, TopicSummary};
