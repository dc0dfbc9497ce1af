// Reputation: review sentiment and topic analysis.
//
// This is the library root. Each module corresponds to one stage of the
// analysis, from loading an upload to printing the report.

pub mod config;
pub mod insights;
pub mod output;
pub mod pipeline;
pub mod reviews;
pub mod sentiment;
pub mod topics;
