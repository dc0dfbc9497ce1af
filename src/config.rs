use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::topics::TopicSettings;

/// Central configuration loaded from environment variables.
///
/// Nothing here is secret; the .env file is loaded automatically at startup
/// via dotenvy so tuning can live next to the data. Command-line flags
/// override whatever is loaded here.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Topic model parameters (REPUTATION_TOPICS, REPUTATION_TOP_WORDS,
    /// REPUTATION_MAX_DF, REPUTATION_MIN_DF, REPUTATION_LDA_ITERATIONS,
    /// REPUTATION_SEED)
    pub topics: TopicSettings,
    /// Keywords shown per sentiment group (REPUTATION_KEYWORDS)
    pub keyword_count: usize,
    /// Rows shown in the data preview (REPUTATION_PREVIEW_ROWS)
    pub preview_rows: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            topics: TopicSettings::default(),
            keyword_count: 15,
            preview_rows: 5,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every variable is optional. A variable that is set but does not parse
    /// is an error rather than being silently replaced by the default.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load from an arbitrary key lookup (the environment in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let topics = TopicSettings {
            n_topics: parse_var(&lookup, "REPUTATION_TOPICS", defaults.topics.n_topics)?,
            n_top_words: parse_var(&lookup, "REPUTATION_TOP_WORDS", defaults.topics.n_top_words)?,
            max_df: parse_var(&lookup, "REPUTATION_MAX_DF", defaults.topics.max_df)?,
            min_df: parse_var(&lookup, "REPUTATION_MIN_DF", defaults.topics.min_df)?,
            iterations: parse_var(&lookup, "REPUTATION_LDA_ITERATIONS", defaults.topics.iterations)?,
            seed: parse_var(&lookup, "REPUTATION_SEED", defaults.topics.seed)?,
        };

        Ok(Self {
            topics,
            keyword_count: parse_var(&lookup, "REPUTATION_KEYWORDS", defaults.keyword_count)?,
            preview_rows: parse_var(&lookup, "REPUTATION_PREVIEW_ROWS", defaults.preview_rows)?,
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {raw:?}")),
        _ => Ok(default),
    }
}
