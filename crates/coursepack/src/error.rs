//! Error types for each stage of a scrape.
//!
//! None of these escape a normal run: scrape errors turn into fallback week
//! data and enrichment errors turn into fallback records. They exist so the
//! log line says what actually went wrong.

use std::path::PathBuf;

/// Failure to turn the course page into week data.
#[derive(thiserror::Error, Debug)]
pub enum ScrapeError {
    #[error("error fetching course page: {0}")]
    Fetch(String),

    #[error("course page returned HTTP {0}")]
    Status(u16),

    #[error("no schedule table found")]
    NoScheduleTable,

    #[error("topic matching '{0}' not found in schedule")]
    NoTopicRow(String),
}

/// Failure of one call to the enrichment API.
#[derive(thiserror::Error, Debug)]
pub enum EnrichError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("Parallel API error: {0}")]
    Status(u16),

    #[error("invalid JSON in response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Configuration problems.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("cannot read API key file '{}': {source}", path.display())]
    KeyFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid topic pattern '{pattern}': {source}")]
    TopicPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
