// Summaries of a bulk upload: distributions, trends and keyword insights.

pub mod distribution;
pub mod keywords;
pub mod trend;

pub use distribution::{sentiment_distribution, topic_distribution, LabelCount};
pub use keywords::{KeywordExtractor, KeywordScore};
pub use trend::{parse_date, sentiment_trend, TrendPoint, TrendUnavailable};
